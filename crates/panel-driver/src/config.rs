//! Panel geometry and pixel-format configuration.

use crate::error::ConfigError;

/// Color depth negotiated between renderer, framework, and controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 16 bits per pixel.
    Rgb565,
    /// 18-bit color carried in 3 bytes; the controller ignores the low two
    /// bits of each channel byte.
    Rgb666,
    /// 24 bits per pixel.
    Rgb888,
}

impl PixelFormat {
    /// Wire depth in bits per pixel, as reported to the bus for buffer
    /// sizing.
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb565 => 16,
            Self::Rgb666 | Self::Rgb888 => 24,
        }
    }
}

/// Immutable panel description, fixed at driver construction.
///
/// The offset locates the physical glass inside the controller's internal
/// framebuffer for panels smaller than the silicon's addressable space
/// (a 320x480-addressable controller behind a 320x320 panel, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Physical width in pixels.
    pub width: u16,
    /// Physical height in pixels.
    pub height: u16,
    /// Columns between controller origin and panel origin.
    pub offset_x: u16,
    /// Rows between controller origin and panel origin.
    pub offset_y: u16,
    /// Negotiated color depth.
    pub format: PixelFormat,
}

impl DisplayConfig {
    /// Configuration with no offset.
    pub const fn new(width: u16, height: u16, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            offset_x: 0,
            offset_y: 0,
            format,
        }
    }

    /// Same configuration with a pixel offset.
    #[must_use]
    pub const fn with_offset(mut self, offset_x: u16, offset_y: u16) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Dimension sanity check. Offset-versus-addressable-space is the init
    /// sequence's concern, not the framework's.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        Ok(())
    }
}

/// Buffer-delivery mode the renderer should run in, decided by the bus
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawMode {
    /// Only the dirty rectangle transfers per frame (addressed buses).
    Partial,
    /// Both framebuffers rotate as a circular full-frame pair; the panel
    /// scans memory continuously (mapped buses).
    Full,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_depths() {
        assert_eq!(PixelFormat::Rgb565.bits_per_pixel(), 16);
        assert_eq!(PixelFormat::Rgb666.bits_per_pixel(), 24);
        assert_eq!(PixelFormat::Rgb888.bits_per_pixel(), 24);
    }

    #[test]
    fn test_offset_builder() {
        let config = DisplayConfig::new(320, 320, PixelFormat::Rgb565).with_offset(0, 80);
        assert_eq!(config.offset_x, 0);
        assert_eq!(config.offset_y, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = DisplayConfig::new(0, 320, PixelFormat::Rgb565);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension));
        let config = DisplayConfig::new(320, 0, PixelFormat::Rgb565);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimension));
    }
}

//! Memory-access-control (MADCTL) computation.
//!
//! Maps a logical rotation plus a color-order policy to the 8-bit value
//! written to register `0x36`. The four named rotations index a
//! controller-family-standard table; [`Orientation::Raw`] bypasses the table
//! for silicon with a non-standard bit layout.

use crate::bus::BusKind;
use crate::error::ConfigError;

/// Row/column exchange bit.
pub const MADCTL_MV: u8 = 0x20;

/// Mirror-X bit.
pub const MADCTL_MX: u8 = 0x40;

/// Mirror-Y bit.
pub const MADCTL_MY: u8 = 0x80;

/// Standard rotation table, indexed by the four named rotations in order:
/// portrait, landscape, reverse portrait, reverse landscape.
pub const MADCTL_ROTATIONS: [u8; 4] = [
    MADCTL_MX,
    MADCTL_MV,
    MADCTL_MY,
    MADCTL_MY | MADCTL_MX | MADCTL_MV,
];

/// Sub-pixel order flag carried in the addressing register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    /// Natural order.
    Rgb,
    /// Swapped order.
    Bgr,
}

impl ColorOrder {
    /// MADCTL bit pattern for this order.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Rgb => 0x00,
            Self::Bgr => 0x08,
        }
    }

    /// Default order for the attached bus family.
    ///
    /// Addressed (SPI-like) wiring runs swapped; framebuffer-mapped wiring
    /// runs natural. This is a bus-family property, never a per-controller
    /// constant.
    pub const fn for_bus(kind: BusKind) -> Self {
        match kind {
            BusKind::Addressed => Self::Bgr,
            BusKind::Mapped => Self::Rgb,
        }
    }
}

/// Logical display rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Native scan direction.
    #[default]
    Portrait,
    /// Rotated a quarter turn.
    Landscape,
    /// Upside-down portrait.
    ReversePortrait,
    /// Upside-down landscape.
    ReverseLandscape,
    /// Verbatim register value, OR-ed with the color-order bits only.
    /// The caller takes responsibility for the bit layout.
    Raw(u8),
}

/// Compute the addressing-register value for `orientation` under `order`.
///
/// `table` supplies the rotation bits for the four named rotations; a table
/// shorter than the requested index is [`ConfigError::OrientationUnsupported`],
/// never silently clamped.
pub fn madctl_value(
    order: ColorOrder,
    orientation: Orientation,
    table: &[u8],
) -> Result<u8, ConfigError> {
    let index = match orientation {
        Orientation::Raw(value) => return Ok(value | order.bits()),
        Orientation::Portrait => 0,
        Orientation::Landscape => 1,
        Orientation::ReversePortrait => 2,
        Orientation::ReverseLandscape => 3,
    };
    let bits = table
        .get(index)
        .copied()
        .ok_or(ConfigError::OrientationUnsupported)?;
    Ok(bits | order.bits())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

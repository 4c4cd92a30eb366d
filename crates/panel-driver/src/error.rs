//! Error taxonomy.
//!
//! Configuration problems are fatal and surface at construction or bring-up.
//! Protocol misuse covers caller contract violations around the flush cycle.
//! Bus failures propagate unchanged; the framework never retries a panel
//! register transaction (a partial multi-byte command replayed from the start
//! can desynchronize controller state).

use crate::pins::GpioError;

/// Fatal configuration problem, raised at construction or `init` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Panel width or height is zero.
    ZeroDimension,
    /// The controller has no depth code for the configured pixel format.
    PixelFormatUnsupported,
    /// The requested rotation has no entry in the controller's table.
    OrientationUnsupported,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "panel dimensions must be non-zero"),
            Self::PixelFormatUnsupported => {
                write!(f, "no controller depth code for the configured pixel format")
            }
            Self::OrientationUnsupported => {
                write!(f, "rotation has no entry in the controller table")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Driver-level error. `E` is the bus collaborator's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// Fatal configuration problem.
    Config(ConfigError),
    /// Operation requires `init()` to have completed.
    NotInitialized,
    /// `init()` called on a driver that already ran its bring-up program.
    AlreadyInitialized,
    /// A flush is already outstanding; wait for its completion first.
    FlushInFlight,
    /// Reset requested while a flush is outstanding.
    ResetWhileFlushing,
    /// A control line failed to switch.
    Gpio,
    /// Bus transfer failure, propagated unchanged.
    Bus(E),
}

impl<E> From<ConfigError> for PanelError<E> {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl<E> From<GpioError> for PanelError<E> {
    fn from(_: GpioError) -> Self {
        Self::Gpio
    }
}

impl<E> core::fmt::Display for PanelError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::NotInitialized => write!(f, "driver not initialized"),
            Self::AlreadyInitialized => write!(f, "driver already initialized"),
            Self::FlushInFlight => write!(f, "flush already in flight"),
            Self::ResetWhileFlushing => write!(f, "reset refused while a flush is in flight"),
            Self::Gpio => write!(f, "control line failed to switch"),
            Self::Bus(_) => write!(f, "bus transfer failed"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for PanelError<E> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    /// Every variant formats to a non-empty message.
    #[test]
    fn test_variants_have_descriptions() {
        use std::string::ToString;

        let config = [
            ConfigError::ZeroDimension,
            ConfigError::PixelFormatUnsupported,
            ConfigError::OrientationUnsupported,
        ];
        for variant in config {
            assert!(
                !variant.to_string().is_empty(),
                "ConfigError::{variant:?} must have a non-empty Display string"
            );
        }

        let panel: [PanelError<()>; 7] = [
            PanelError::Config(ConfigError::ZeroDimension),
            PanelError::NotInitialized,
            PanelError::AlreadyInitialized,
            PanelError::FlushInFlight,
            PanelError::ResetWhileFlushing,
            PanelError::Gpio,
            PanelError::Bus(()),
        ];
        for variant in panel {
            assert!(
                !variant.to_string().is_empty(),
                "PanelError::{variant:?} must have a non-empty Display string"
            );
        }
    }

    /// Conversions land in the matching variant.
    #[test]
    fn test_conversions() {
        let err: PanelError<()> = ConfigError::ZeroDimension.into();
        assert_eq!(err, PanelError::Config(ConfigError::ZeroDimension));

        let err: PanelError<()> = GpioError.into();
        assert_eq!(err, PanelError::Gpio);
    }
}

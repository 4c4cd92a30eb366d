//! Controller capability contract.
//!
//! Each supported silicon variant supplies its bring-up program as data plus
//! a pixel-format mapping; one shared [`PanelDriver`](crate::PanelDriver)
//! executes it. Variants with a non-standard MADCTL layout override
//! [`Controller::rotation_table`].

use crate::config::PixelFormat;
use crate::orientation::MADCTL_ROTATIONS;

/// One step of a controller bring-up program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// Write a command with the given parameter bytes.
    Cmd(u8, &'static [u8]),
    /// Pause before the next step.
    DelayMs(u32),
    /// Write the addressing register (0x36) computed from the current
    /// orientation, the bus-derived color order, and the controller's
    /// rotation table.
    Madctl,
    /// Write the pixel-format register (0x3A) with the controller's depth
    /// code for the configured format.
    PixelFormat,
}

/// Per-silicon capability contract consumed by the framework.
pub trait Controller {
    /// Controller name, for diagnostics.
    const NAME: &'static str;

    /// Ordered bring-up program, run exactly once by
    /// [`PanelDriver::init`](crate::PanelDriver::init).
    fn init_sequence(&self) -> &'static [InitStep];

    /// Rotation bits for the four named rotations. The default is the
    /// controller-family-standard table.
    fn rotation_table(&self) -> &'static [u8] {
        &MADCTL_ROTATIONS
    }

    /// Depth code for the pixel-format register, or `None` when this silicon
    /// has no code for `format` (a hard configuration error; the framework
    /// never substitutes a neighboring depth).
    fn pixel_format_code(&self, format: PixelFormat) -> Option<u8>;
}

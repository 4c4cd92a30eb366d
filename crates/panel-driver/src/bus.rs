//! Bus-collaborator contract.
//!
//! The bus owns the DMA-capable framebuffer pair and the physical transport
//! (SPI, i8080, RGB/parallel). The framework consumes this trait; it never
//! allocates pixel memory and never waits for transfer completion inline.
//! Completion arrives through the [`FlushSignal`] the framework registers at
//! construction.

use crate::flush::FlushSignal;

/// Bus family, which decides addressing behaviour and default color order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusKind {
    /// Needs an explicit column/row window before each pixel transfer
    /// (SPI- or i8080-attached controllers with local RAM).
    Addressed,
    /// The panel continuously scans a fixed memory region; no windowing
    /// commands exist (RGB/parallel wiring). Completion is the next
    /// vertical-sync boundary.
    Mapped,
}

/// Identifies one of the two bus-owned framebuffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameBufferSlot {
    /// First buffer.
    First,
    /// Second buffer.
    Second,
}

impl FrameBufferSlot {
    /// Zero-based index of this slot.
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The companion slot, for circular double-buffer schemes.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Inclusive pixel-bounds rectangle handed across the flush path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Area {
    /// Left column, inclusive.
    pub x1: u16,
    /// Top row, inclusive.
    pub y1: u16,
    /// Right column, inclusive.
    pub x2: u16,
    /// Bottom row, inclusive.
    pub y2: u16,
}

impl Area {
    /// Rectangle from inclusive bounds.
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Full-panel rectangle for a `width` x `height` panel.
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: width.saturating_sub(1),
            y2: height.saturating_sub(1),
        }
    }

    /// This rectangle shifted by a pixel offset.
    #[must_use]
    pub const fn translated(self, dx: u16, dy: u16) -> Self {
        Self {
            x1: self.x1.saturating_add(dx),
            y1: self.y1.saturating_add(dy),
            x2: self.x2.saturating_add(dx),
            y2: self.y2.saturating_add(dy),
        }
    }

    /// Width in pixels.
    pub const fn width(self) -> u16 {
        self.x2.saturating_sub(self.x1).saturating_add(1)
    }

    /// Height in pixels.
    pub const fn height(self) -> u16 {
        self.y2.saturating_sub(self.y1).saturating_add(1)
    }
}

/// Contract the framework consumes from the attached bus.
///
/// Single-task model: no `Send` bounds, mirroring single-threaded embedded
/// executors. The one cross-context edge is the registered [`FlushSignal`],
/// which the bus raises from its completion context (DMA interrupt for
/// addressed buses, vertical sync for mapped buses).
pub trait PanelBus {
    /// Transport error type, propagated unchanged through the framework.
    type Error: core::fmt::Debug;

    /// Which bus family this is.
    fn kind(&self) -> BusKind;

    /// Tell the bus the panel geometry and wire depth; the bus sizes its
    /// framebuffer pair from these.
    fn init(&mut self, width: u16, height: u16, bits_per_pixel: u8) -> Result<(), Self::Error>;

    /// Common byte size of each framebuffer.
    fn frame_buffer_size(&self) -> usize;

    /// Borrow one framebuffer for the renderer to fill.
    ///
    /// Callers must not write a slot that is currently in flight; the
    /// at-most-one-in-flight contract makes the live slot unambiguous.
    fn frame_buffer(&mut self, slot: FrameBufferSlot) -> &mut [u8];

    /// Register the completion signal. The bus calls [`FlushSignal::finish`]
    /// once per completed color transfer, from any context.
    fn register_flush_signal(&mut self, signal: &'static FlushSignal);

    /// Write `command` with the given parameter bytes.
    fn tx_param(
        &mut self,
        command: u8,
        params: &[u8],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Issue `command` and read back `params.len()` parameter bytes.
    fn rx_param(
        &mut self,
        command: u8,
        params: &mut [u8],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Submit the pixel block in `slot` covering `area`.
    ///
    /// Resolves once the transfer is submitted, not when it completes;
    /// completion arrives through the registered [`FlushSignal`].
    fn tx_color(
        &mut self,
        command: u8,
        slot: FrameBufferSlot,
        area: Area,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_area_full_is_inclusive() {
        let area = Area::full(240, 320);
        assert_eq!(area, Area::new(0, 0, 239, 319));
        assert_eq!(area.width(), 240);
        assert_eq!(area.height(), 320);
    }

    #[test]
    fn test_area_translation() {
        let area = Area::new(10, 20, 59, 79).translated(2, 3);
        assert_eq!(area, Area::new(12, 23, 61, 82));
    }

    #[test]
    fn test_slot_pairing() {
        assert_eq!(FrameBufferSlot::First.other(), FrameBufferSlot::Second);
        assert_eq!(FrameBufferSlot::Second.other(), FrameBufferSlot::First);
        assert_eq!(FrameBufferSlot::First.index(), 0);
        assert_eq!(FrameBufferSlot::Second.index(), 1);
    }
}

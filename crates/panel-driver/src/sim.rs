//! Recording bus double for host-side tests.
//!
//! [`SimBus`] implements [`PanelBus`] in memory: every call is appended to a
//! bounded transaction log that tests compare byte for byte against the
//! traffic a real panel would have seen. Color transfers resolve at
//! submission like real DMA; a test plays the completion interrupt by
//! calling [`SimBus::complete_flush`].
//!
//! Pixel memory is capped at [`BUF_CAP`] bytes per slot. The log captures
//! addressing and register traffic, which is what tests assert on; panels
//! larger than the cap still log correctly, they just expose a truncated
//! buffer slice.

use crate::bus::{Area, BusKind, FrameBufferSlot, PanelBus};
use crate::flush::FlushSignal;

/// Parameter bytes retained per logged command. Sized past the longest
/// standard bring-up write (15-byte gamma tables).
pub const PARAM_CAP: usize = 16;

/// Transactions retained before the log drops new entries.
pub const LOG_CAP: usize = 64;

/// Backing bytes per simulated framebuffer slot.
pub const BUF_CAP: usize = 512;

/// One recorded bus call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Geometry handshake from the framework.
    Init {
        /// Panel width in pixels.
        width: u16,
        /// Panel height in pixels.
        height: u16,
        /// Wire depth.
        bits_per_pixel: u8,
    },
    /// Command write with parameter bytes.
    Param {
        /// Command byte.
        command: u8,
        /// Parameter bytes, truncated at [`PARAM_CAP`].
        data: heapless::Vec<u8, PARAM_CAP>,
    },
    /// Command issue with a parameter read-back.
    ParamRead {
        /// Command byte.
        command: u8,
        /// Bytes the caller asked for.
        len: usize,
    },
    /// Pixel-block submission.
    Color {
        /// Command byte.
        command: u8,
        /// Which framebuffer was submitted.
        slot: FrameBufferSlot,
        /// Window the transfer covered.
        area: Area,
    },
}

impl Transaction {
    /// Expected-value helper for command writes.
    #[allow(clippy::indexing_slicing)] // Safety: take <= data.len()
    pub fn param(command: u8, data: &[u8]) -> Self {
        let mut bytes = heapless::Vec::new();
        let take = data.len().min(PARAM_CAP);
        // take <= PARAM_CAP, so this cannot overflow capacity.
        bytes.extend_from_slice(&data[..take]).ok();
        Self::Param {
            command,
            data: bytes,
        }
    }
}

/// Transport failure injected by [`SimBus::set_fail_transfers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimBusError;

impl core::fmt::Display for SimBusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "simulated bus transfer failure")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimBusError {}

/// In-memory [`PanelBus`] with a transaction log.
pub struct SimBus {
    kind: BusKind,
    log: heapless::Vec<Transaction, LOG_CAP>,
    size: usize,
    buffer_a: [u8; BUF_CAP],
    buffer_b: [u8; BUF_CAP],
    signal: Option<&'static FlushSignal>,
    response: heapless::Vec<u8, PARAM_CAP>,
    fail_transfers: bool,
}

impl SimBus {
    fn new(kind: BusKind) -> Self {
        Self {
            kind,
            log: heapless::Vec::new(),
            size: 0,
            buffer_a: [0; BUF_CAP],
            buffer_b: [0; BUF_CAP],
            signal: None,
            response: heapless::Vec::new(),
            fail_transfers: false,
        }
    }

    /// Addressed-family bus (SPI/i8080 behaviour).
    pub fn addressed() -> Self {
        Self::new(BusKind::Addressed)
    }

    /// Mapped-family bus (RGB/parallel behaviour).
    pub fn mapped() -> Self {
        Self::new(BusKind::Mapped)
    }

    /// Everything recorded so far, in call order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.log
    }

    /// Drop the log, keeping geometry and registration intact.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Bytes the next `rx_param` calls answer with.
    #[allow(clippy::indexing_slicing)] // Safety: take <= bytes.len()
    pub fn set_response(&mut self, bytes: &[u8]) {
        self.response.clear();
        let take = bytes.len().min(PARAM_CAP);
        // take <= PARAM_CAP, so this cannot overflow capacity.
        self.response.extend_from_slice(&bytes[..take]).ok();
    }

    /// Make every subsequent transfer fail before it is recorded.
    pub fn set_fail_transfers(&mut self, fail: bool) {
        self.fail_transfers = fail;
    }

    /// The signal the framework registered, if any.
    pub fn flush_signal(&self) -> Option<&'static FlushSignal> {
        self.signal
    }

    /// Play the completion interrupt for the outstanding color transfer.
    pub fn complete_flush(&self) {
        if let Some(signal) = self.signal {
            signal.finish();
        }
    }

    fn record(&mut self, transaction: Transaction) {
        // Tests stay far below LOG_CAP; beyond it the log drops entries,
        // which an expected-transactions assertion still catches.
        self.log.push(transaction).ok();
    }
}

impl PanelBus for SimBus {
    type Error = SimBusError;

    fn kind(&self) -> BusKind {
        self.kind
    }

    #[allow(clippy::arithmetic_side_effects)] // Safety: u16 dims by a u8 depth fits 64-bit host usize
    fn init(&mut self, width: u16, height: u16, bits_per_pixel: u8) -> Result<(), Self::Error> {
        self.size = usize::from(width) * usize::from(height) * usize::from(bits_per_pixel / 8);
        self.record(Transaction::Init {
            width,
            height,
            bits_per_pixel,
        });
        Ok(())
    }

    fn frame_buffer_size(&self) -> usize {
        self.size
    }

    #[allow(clippy::indexing_slicing)] // Safety: len <= BUF_CAP, the backing array length
    fn frame_buffer(&mut self, slot: FrameBufferSlot) -> &mut [u8] {
        let len = self.size.min(BUF_CAP);
        match slot {
            FrameBufferSlot::First => &mut self.buffer_a[..len],
            FrameBufferSlot::Second => &mut self.buffer_b[..len],
        }
    }

    fn register_flush_signal(&mut self, signal: &'static FlushSignal) {
        self.signal = Some(signal);
    }

    async fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
        if self.fail_transfers {
            return Err(SimBusError);
        }
        self.record(Transaction::param(command, params));
        Ok(())
    }

    #[allow(clippy::indexing_slicing)] // Safety: take <= both slice lengths
    async fn rx_param(&mut self, command: u8, params: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail_transfers {
            return Err(SimBusError);
        }
        self.record(Transaction::ParamRead {
            command,
            len: params.len(),
        });
        let take = params.len().min(self.response.len());
        params[..take].copy_from_slice(&self.response[..take]);
        Ok(())
    }

    async fn tx_color(
        &mut self,
        command: u8,
        slot: FrameBufferSlot,
        area: Area,
    ) -> Result<(), Self::Error> {
        if self.fail_transfers {
            return Err(SimBusError);
        }
        self.record(Transaction::Color {
            command,
            slot,
            area,
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[allow(clippy::indexing_slicing)] // Tests index into known-length buffers
mod tests {
    use super::*;

    /// The log records calls in order with their payloads.
    #[tokio::test]
    async fn test_log_records_in_order() {
        let mut bus = SimBus::addressed();
        bus.init(16, 16, 16).unwrap();
        bus.tx_param(0x36, &[0x48]).await.unwrap();
        bus.tx_color(0x2C, FrameBufferSlot::First, Area::new(0, 0, 15, 15))
            .await
            .unwrap();

        let expected: &[Transaction] = &[
            Transaction::Init {
                width: 16,
                height: 16,
                bits_per_pixel: 16,
            },
            Transaction::param(0x36, &[0x48]),
            Transaction::Color {
                command: 0x2C,
                slot: FrameBufferSlot::First,
                area: Area::new(0, 0, 15, 15),
            },
        ];
        assert_eq!(bus.transactions(), expected);
    }

    /// Reads answer from the staged response and record the request length.
    #[tokio::test]
    async fn test_read_back_uses_staged_response() {
        let mut bus = SimBus::addressed();
        bus.set_response(&[0xAB, 0xCD]);
        let mut params = [0u8; 2];
        bus.rx_param(0x04, &mut params).await.unwrap();
        assert_eq!(params, [0xAB, 0xCD]);
        assert_eq!(
            bus.transactions(),
            &[Transaction::ParamRead {
                command: 0x04,
                len: 2
            }][..]
        );
    }

    /// Injected failures surface before anything is recorded.
    #[tokio::test]
    async fn test_failure_injection_precedes_recording() {
        let mut bus = SimBus::mapped();
        bus.set_fail_transfers(true);
        assert_eq!(bus.tx_param(0x36, &[0x20]).await, Err(SimBusError));
        assert!(bus.transactions().is_empty());
    }

    /// Framebuffer slots are distinct and sized from the geometry handshake.
    #[test]
    fn test_framebuffer_slots_are_distinct() {
        let mut bus = SimBus::addressed();
        bus.init(16, 16, 16).unwrap();
        assert_eq!(bus.frame_buffer_size(), 512);

        bus.frame_buffer(FrameBufferSlot::First)[0] = 0x11;
        bus.frame_buffer(FrameBufferSlot::Second)[0] = 0x22;
        assert_eq!(bus.frame_buffer(FrameBufferSlot::First)[0], 0x11);
        assert_eq!(bus.frame_buffer(FrameBufferSlot::Second)[0], 0x22);
    }
}

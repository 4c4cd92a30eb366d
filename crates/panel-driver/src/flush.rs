//! Flush-completion signal.
//!
//! One slot, two sides: the driver arms the pending latch when it submits a
//! flush; the bus raises the signal from its completion context (DMA
//! interrupt or vertical sync); the renderer awaits the signal before
//! touching the in-flight buffer again. `CriticalSectionRawMutex` keeps the
//! raise side safe from interrupt context on single-core targets.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Single-slot flush-completion primitive.
///
/// Const-constructible so the top-level assembly can place it in a `static`
/// and hand the same reference to the bus, the driver, and the renderer:
///
/// ```
/// use panel_driver::FlushSignal;
///
/// static FLUSH: FlushSignal = FlushSignal::new();
/// ```
pub struct FlushSignal {
    pending: AtomicBool,
    ready: Signal<CriticalSectionRawMutex, ()>,
}

impl FlushSignal {
    /// New idle signal: nothing pending, nothing ready.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            ready: Signal::new(),
        }
    }

    /// Arm the pending latch. Returns `false` if a flush is already in
    /// flight. Arming discards any completion retained from a previous
    /// flush, so a wait started after this observes only the new one.
    pub(crate) fn try_begin(&self) -> bool {
        let armed = self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if armed {
            self.ready.reset();
        }
        armed
    }

    /// Drop the pending latch without raising the ready signal. Used when a
    /// submission fails before anything is in flight.
    pub(crate) fn abort(&self) {
        self.pending.store(false, Ordering::Release);
    }

    /// Completion entry point for the bus: clears the pending latch and
    /// wakes the renderer. Non-blocking; safe from interrupt context.
    pub fn finish(&self) {
        self.pending.store(false, Ordering::Release);
        self.ready.signal(());
    }

    /// Whether a flush is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Park until the in-flight flush completes. Resolves immediately when
    /// none is in flight.
    pub async fn wait_ready(&self) {
        if self.is_pending() {
            self.ready.wait().await;
        }
    }
}

impl Default for FlushSignal {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

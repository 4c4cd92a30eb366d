//! Controller catalog for the `panel-driver` framework
//!
//! One module per silicon variant. Each carries the variant's bring-up
//! program as a declarative step list plus its pixel-format register codes;
//! the shared [`PanelDriver`](panel_driver::PanelDriver) executes them. No
//! transport code lives here.
//!
//! # Example
//!
//! ```no_run
//! use embedded_hal_async::delay::DelayNs;
//! use panel_controllers::St7796;
//! use panel_driver::{
//!     ControlPins, DisplayConfig, FlushSignal, NoPin, PanelBus, PanelDriver, PanelError,
//!     PixelFormat,
//! };
//!
//! static FLUSH: FlushSignal = FlushSignal::new();
//!
//! async fn bring_up<B: PanelBus, D: DelayNs>(
//!     bus: B,
//!     delay: &mut D,
//! ) -> Result<(), PanelError<B::Error>> {
//!     let config = DisplayConfig::new(320, 480, PixelFormat::Rgb565);
//!     let pins = ControlPins::<NoPin, NoPin, NoPin, NoPin>::unbound();
//!     let mut panel = PanelDriver::new(bus, St7796, config, pins, &FLUSH)?;
//!     panel.init(delay).await
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Pedantic lints suppressed for this catalog crate:
#![allow(clippy::doc_markdown)] // register mnemonics (CSCON, MADCTL) in doc comments
#![allow(clippy::module_name_repetitions)]

pub mod ili9488;
pub mod st7796;

pub use ili9488::Ili9488;
pub use st7796::St7796;

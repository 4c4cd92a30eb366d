//! Generic driver framework for register-programmed display panels
//!
//! This crate mediates between a dirty-rectangle renderer and panel silicon
//! reached over either an addressed bus (SPI / i8080, explicit windowing)
//! or a framebuffer-mapped bus (RGB / parallel, continuous scan-out). Panel
//! policy lives here; transports and pixel memory live in the bus
//! implementation.
//!
//! # Architecture Layers
//!
//! ```text
//! Renderer (dirty-rect drawing loop)
//!         ↓
//! PanelDriver (this crate: lifecycle, flush protocol, orientation)
//!         ↓
//! PanelBus implementation (SPI / i8080 DMA, RGB scan-out)
//!         ↓
//! Panel silicon (ST7796, ILI9488, ...)
//! ```
//!
//! Flushes are asynchronous end to end: [`PanelDriver::flush`] resolves once
//! the transfer is submitted, and the bus reports completion from its
//! interrupt context through the registered [`FlushSignal`]. At most one
//! flush is in flight at a time.
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls (host tooling and tests)
//! - `simulator`: in-memory recording bus for host tests
//! - `defmt`: `defmt::Format` derives on public types
//! - `graphics`: `embedded-graphics` rectangle conversions
//!
//! # Example
//!
//! ```no_run
//! use embedded_hal_async::delay::DelayNs;
//! use panel_driver::{
//!     Area, ControlPins, Controller, DisplayConfig, FlushSignal, FrameBufferSlot, NoPin,
//!     PanelBus, PanelDriver, PanelError, PixelFormat,
//! };
//!
//! static FLUSH: FlushSignal = FlushSignal::new();
//!
//! async fn bring_up<B, C, D>(
//!     bus: B,
//!     controller: C,
//!     delay: &mut D,
//! ) -> Result<(), PanelError<B::Error>>
//! where
//!     B: PanelBus,
//!     C: Controller,
//!     D: DelayNs,
//! {
//!     let config = DisplayConfig::new(240, 320, PixelFormat::Rgb565);
//!     let pins = ControlPins::<NoPin, NoPin, NoPin, NoPin>::unbound();
//!     let mut panel = PanelDriver::new(bus, controller, config, pins, &FLUSH)?;
//!     panel.init(delay).await?;
//!
//!     panel.flush(Area::full(240, 320), FrameBufferSlot::First).await?;
//!     panel.wait_flush_done().await;
//!     Ok(())
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// Pedantic lints suppressed for this driver crate:
#![allow(clippy::doc_markdown)] // register mnemonics (CASET, MADCTL) in doc comments
#![allow(clippy::must_use_candidate)] // accessors; callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// `no_std` removes std from the extern prelude; the `std` feature's
// error-trait impls need it linked back in.
#[cfg(feature = "std")]
extern crate std;

pub mod bus;
pub mod config;
pub mod controller;
pub mod dcs;
pub mod driver;
pub mod error;
pub mod flush;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod orientation;
pub mod pins;
#[cfg(any(test, feature = "simulator"))]
pub mod sim;

// Re-export driver types
pub use driver::{DriverState, PanelDriver, PendingFlush};

// Re-export the bus contract
pub use bus::{Area, BusKind, FrameBufferSlot, PanelBus};

// Re-export configuration types
pub use config::{DisplayConfig, DrawMode, PixelFormat};

// Re-export the controller contract
pub use controller::{Controller, InitStep};

// Re-export error types
pub use error::{ConfigError, PanelError};

// Re-export the flush-completion signal
pub use flush::FlushSignal;

// Re-export orientation types
pub use orientation::{ColorOrder, Orientation, MADCTL_ROTATIONS};

// Re-export pin-control types
pub use pins::{
    ActiveLevel, Backlight, ControlPins, GpioError, NoPin, PwmBacklight, ResetLine, SwitchLine,
};

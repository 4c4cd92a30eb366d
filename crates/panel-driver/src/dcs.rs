//! Display command set registers shared by the supported controller family.
//!
//! These are the MIPI-DCS opcodes the framework itself issues. Controller
//! bring-up programs carry their own, silicon-specific registers alongside
//! these.

/// Column address set: two big-endian u16 bounds, inclusive.
pub const CASET: u8 = 0x2A;

/// Row address set: two big-endian u16 bounds, inclusive.
pub const RASET: u8 = 0x2B;

/// Memory write: starts the pixel stream into the addressed window.
pub const RAMWR: u8 = 0x2C;

/// Memory access control: scan direction and color order.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format.
pub const COLMOD: u8 = 0x3A;

//! Sitronix ST7796 / ST7796S TFT controller.
//!
//! 320 x 480 internal framebuffer. Physical panels smaller than the
//! addressable space carry a pixel offset in their
//! [`DisplayConfig`](panel_driver::DisplayConfig) so windows land on the
//! glass.

use panel_driver::{Controller, InitStep, PixelFormat};

const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const DISPON: u8 = 0x29;
/// Command set control: the extended register space is locked at reset.
const CSCON: u8 = 0xF0;
const INVTR: u8 = 0xB4;
const DFC: u8 = 0xB6;
const DOCA: u8 = 0xE8;
const PWR2: u8 = 0xC1;
const PWR3: u8 = 0xC2;
const VCMPCTL: u8 = 0xC5;
const PGC: u8 = 0xE0;
const NGC: u8 = 0xE1;

/// 65K colors, 16 bits per pixel on the wire.
const PIXEL_16BIT: u8 = 0x05;
/// 262K colors, 3 bytes per pixel on the wire. The silicon ignores the low
/// two bits of each channel byte; there is no true 24-bit mode.
const PIXEL_18BIT: u8 = 0x07;

/// Bring-up program. The extended command set is unlocked with CSCON
/// `C3h`/`96h` before the vendor registers and relocked with `3Ch`/`69h`
/// after the gamma tables.
const SEQUENCE: &[InitStep] = &[
    InitStep::Cmd(SWRESET, &[]),
    InitStep::DelayMs(120),
    InitStep::Cmd(SLPOUT, &[]),
    InitStep::DelayMs(120),
    InitStep::Cmd(CSCON, &[0xC3]),
    InitStep::Cmd(CSCON, &[0x96]),
    InitStep::Madctl,
    InitStep::PixelFormat,
    // 1-dot inversion
    InitStep::Cmd(INVTR, &[0x01]),
    InitStep::Cmd(DFC, &[0x80, 0x02, 0x3B]),
    InitStep::Cmd(DOCA, &[0x40, 0x8A, 0x00, 0x00, 0x29, 0x19, 0xA5, 0x33]),
    InitStep::Cmd(PWR2, &[0x06]),
    InitStep::Cmd(PWR3, &[0xA7]),
    InitStep::Cmd(VCMPCTL, &[0x18]),
    InitStep::DelayMs(120),
    InitStep::Cmd(
        PGC,
        &[
            0xF0, 0x09, 0x0B, 0x06, 0x04, 0x15, 0x2F, 0x54, 0x42, 0x3C, 0x17, 0x14, 0x18, 0x1B,
        ],
    ),
    InitStep::Cmd(
        NGC,
        &[
            0xE0, 0x09, 0x0B, 0x06, 0x04, 0x03, 0x2B, 0x43, 0x42, 0x3B, 0x16, 0x14, 0x17, 0x1B,
        ],
    ),
    InitStep::DelayMs(120),
    InitStep::Cmd(CSCON, &[0x3C]),
    InitStep::Cmd(CSCON, &[0x69]),
    InitStep::DelayMs(120),
    InitStep::Cmd(DISPON, &[]),
    InitStep::DelayMs(120),
];

/// ST7796 capability entry.
///
/// Uses the standard four-rotation MADCTL table. Supports 65K and 262K
/// color modes; configuring `Rgb888` fails the bring-up with a
/// pixel-format error rather than silently dropping to 262K.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct St7796;

impl Controller for St7796 {
    const NAME: &'static str = "ST7796";

    fn init_sequence(&self) -> &'static [InitStep] {
        SEQUENCE
    }

    fn pixel_format_code(&self, format: PixelFormat) -> Option<u8> {
        match format {
            PixelFormat::Rgb565 => Some(PIXEL_16BIT),
            PixelFormat::Rgb666 => Some(PIXEL_18BIT),
            PixelFormat::Rgb888 => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Ilitek ILI9488 TFT controller.
//!
//! 320 x 480 internal framebuffer. The bring-up program is pure register
//! tuning: no software reset, no sleep-out, no display-on and no settle
//! delays. Pair it with a hardware reset pulse before `init` on modules
//! that do not come up scanning.

use panel_driver::{Controller, InitStep, PixelFormat};

const NOP: u8 = 0x00;
const IFMODE: u8 = 0xB0;
const FRMCTR1: u8 = 0xB1;
const INVC: u8 = 0xB4;
const DFC: u8 = 0xB6;
const ETMOD: u8 = 0xB7;
const PWR1: u8 = 0xC0;
const PWR2: u8 = 0xC1;
const VMCTL: u8 = 0xC5;
const PGC: u8 = 0xE0;
const NGC: u8 = 0xE1;
const ADJCTL3: u8 = 0xF7;

/// 16 bits per pixel, DBI and DPI nibbles both set.
const PIXEL_16BIT: u8 = 0xAA;
/// 3 bytes per pixel, DBI and DPI nibbles both set. Serves the 18- and
/// 24-bit configurations alike.
const PIXEL_18BIT: u8 = 0xEE;

/// Frame rate 60 Hz.
const FRAME_RATE_60HZ: u8 = 0xA0;
/// SDO shared with the data lines stays driven.
const USE_SDO: u8 = 0x00;

const SEQUENCE: &[InitStep] = &[
    InitStep::Cmd(
        PGC,
        &[
            0x00, 0x03, 0x09, 0x08, 0x16, 0x0A, 0x3F, 0x78, 0x4C, 0x09, 0x0A, 0x08, 0x16, 0x1A,
            0x0F,
        ],
    ),
    InitStep::Cmd(
        NGC,
        &[
            0x00, 0x16, 0x19, 0x03, 0x0F, 0x05, 0x32, 0x45, 0x46, 0x04, 0x0E, 0x0D, 0x35, 0x37,
            0x0F,
        ],
    ),
    InitStep::Cmd(PWR1, &[0x17, 0x15]),
    InitStep::Cmd(PWR2, &[0x41]),
    InitStep::Cmd(VMCTL, &[0x00, 0x12, 0x80]),
    InitStep::Madctl,
    InitStep::PixelFormat,
    InitStep::Cmd(IFMODE, &[USE_SDO]),
    InitStep::Cmd(FRMCTR1, &[FRAME_RATE_60HZ]),
    // 2-dot inversion
    InitStep::Cmd(INVC, &[0x02]),
    InitStep::Cmd(DFC, &[0x02, 0x02, 0x3B]),
    InitStep::Cmd(ETMOD, &[0xC6]),
    InitStep::Cmd(ADJCTL3, &[0xA9, 0x51, 0x2C, 0x02]),
    InitStep::Cmd(NOP, &[]),
];

/// ILI9488 capability entry.
///
/// Uses the standard four-rotation MADCTL table. Pixel codes set the DBI
/// and DPI nibbles to the same depth, so one program covers serial and
/// parallel wiring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ili9488;

impl Controller for Ili9488 {
    const NAME: &'static str = "ILI9488";

    fn init_sequence(&self) -> &'static [InitStep] {
        SEQUENCE
    }

    fn pixel_format_code(&self, format: PixelFormat) -> Option<u8> {
        match format {
            PixelFormat::Rgb565 => Some(PIXEL_16BIT),
            PixelFormat::Rgb666 | PixelFormat::Rgb888 => Some(PIXEL_18BIT),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

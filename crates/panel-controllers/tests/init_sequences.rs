//! Byte-exact bring-up verification against the simulated bus.
//!
//! Every register write each controller program produces is compared with
//! the wire traffic a known-good module expects, in order, including the
//! dynamically computed MADCTL and COLMOD values.
//!
//! Run with: cargo test -p panel-controllers --test init_sequences

#![allow(clippy::unwrap_used, clippy::expect_used)]

use embedded_hal_mock::eh1::delay::NoopDelay;
use panel_controllers::{Ili9488, St7796};
use panel_driver::sim::{SimBus, Transaction};
use panel_driver::{
    ControlPins, Controller, DisplayConfig, DriverState, FlushSignal, NoPin, PanelDriver,
    PixelFormat,
};

fn flush_signal() -> &'static FlushSignal {
    Box::leak(Box::new(FlushSignal::new()))
}

async fn init_on_addressed<C: Controller>(
    controller: C,
    config: DisplayConfig,
) -> PanelDriver<SimBus, C, NoPin, NoPin, NoPin, NoPin> {
    let mut panel = PanelDriver::new(
        SimBus::addressed(),
        controller,
        config,
        ControlPins::unbound(),
        flush_signal(),
    )
    .unwrap();
    panel.init(&mut NoopDelay).await.unwrap();
    panel
}

/// Full ST7796 bring-up on a 240x320 RGB565 module: command-set unlock,
/// portrait BGR addressing (0x48), 65K pixel mode, vendor tuning, relock,
/// display on.
#[tokio::test]
async fn test_st7796_full_wire_sequence() {
    let panel = init_on_addressed(St7796, DisplayConfig::new(240, 320, PixelFormat::Rgb565)).await;
    assert_eq!(panel.state(), DriverState::Ready);
    assert_eq!(panel.controller_name(), "ST7796");

    let expected: &[Transaction] = &[
        Transaction::Init {
            width: 240,
            height: 320,
            bits_per_pixel: 16,
        },
        Transaction::param(0x01, &[]),
        Transaction::param(0x11, &[]),
        Transaction::param(0xF0, &[0xC3]),
        Transaction::param(0xF0, &[0x96]),
        Transaction::param(0x36, &[0x48]),
        Transaction::param(0x3A, &[0x05]),
        Transaction::param(0xB4, &[0x01]),
        Transaction::param(0xB6, &[0x80, 0x02, 0x3B]),
        Transaction::param(0xE8, &[0x40, 0x8A, 0x00, 0x00, 0x29, 0x19, 0xA5, 0x33]),
        Transaction::param(0xC1, &[0x06]),
        Transaction::param(0xC2, &[0xA7]),
        Transaction::param(0xC5, &[0x18]),
        Transaction::param(
            0xE0,
            &[
                0xF0, 0x09, 0x0B, 0x06, 0x04, 0x15, 0x2F, 0x54, 0x42, 0x3C, 0x17, 0x14, 0x18, 0x1B,
            ],
        ),
        Transaction::param(
            0xE1,
            &[
                0xE0, 0x09, 0x0B, 0x06, 0x04, 0x03, 0x2B, 0x43, 0x42, 0x3B, 0x16, 0x14, 0x17, 0x1B,
            ],
        ),
        Transaction::param(0xF0, &[0x3C]),
        Transaction::param(0xF0, &[0x69]),
        Transaction::param(0x29, &[]),
    ];
    assert_eq!(panel.bus().transactions(), expected);
}

/// Full ILI9488 bring-up on a 320x480 RGB666 module: gamma and power
/// blocks, portrait BGR addressing, 18-bit pixel mode on both interface
/// nibbles, NOP terminator. No sleep-out or display-on commands exist in
/// this program.
#[tokio::test]
async fn test_ili9488_full_wire_sequence() {
    let panel = init_on_addressed(Ili9488, DisplayConfig::new(320, 480, PixelFormat::Rgb666)).await;
    assert_eq!(panel.state(), DriverState::Ready);
    assert_eq!(panel.controller_name(), "ILI9488");

    let expected: &[Transaction] = &[
        Transaction::Init {
            width: 320,
            height: 480,
            bits_per_pixel: 24,
        },
        Transaction::param(
            0xE0,
            &[
                0x00, 0x03, 0x09, 0x08, 0x16, 0x0A, 0x3F, 0x78, 0x4C, 0x09, 0x0A, 0x08, 0x16,
                0x1A, 0x0F,
            ],
        ),
        Transaction::param(
            0xE1,
            &[
                0x00, 0x16, 0x19, 0x03, 0x0F, 0x05, 0x32, 0x45, 0x46, 0x04, 0x0E, 0x0D, 0x35,
                0x37, 0x0F,
            ],
        ),
        Transaction::param(0xC0, &[0x17, 0x15]),
        Transaction::param(0xC1, &[0x41]),
        Transaction::param(0xC5, &[0x00, 0x12, 0x80]),
        Transaction::param(0x36, &[0x48]),
        Transaction::param(0x3A, &[0xEE]),
        Transaction::param(0xB0, &[0x00]),
        Transaction::param(0xB1, &[0xA0]),
        Transaction::param(0xB4, &[0x02]),
        Transaction::param(0xB6, &[0x02, 0x02, 0x3B]),
        Transaction::param(0xB7, &[0xC6]),
        Transaction::param(0xF7, &[0xA9, 0x51, 0x2C, 0x02]),
        Transaction::param(0x00, &[]),
    ];
    assert_eq!(panel.bus().transactions(), expected);
}

/// A mapped bus flips the computed MADCTL to RGB order; everything else in
/// the program is identical.
#[tokio::test]
async fn test_madctl_follows_bus_family() {
    let mut panel = PanelDriver::new(
        SimBus::mapped(),
        St7796,
        DisplayConfig::new(240, 320, PixelFormat::Rgb565),
        ControlPins::<NoPin, NoPin, NoPin, NoPin>::unbound(),
        flush_signal(),
    )
    .unwrap();
    panel.init(&mut NoopDelay).await.unwrap();

    // Portrait without the BGR bit.
    assert!(panel
        .bus()
        .transactions()
        .contains(&Transaction::param(0x36, &[0x40])));
}

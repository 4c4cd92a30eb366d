//! Bring up an ST7796 module on the simulated bus and walk one flush cycle.
//!
//! Run with: cargo run -p panel-controllers --example bringup

use embedded_hal_mock::eh1::delay::NoopDelay;
use panel_controllers::St7796;
use panel_driver::sim::{SimBus, Transaction};
use panel_driver::{
    Area, ControlPins, DisplayConfig, FlushSignal, FrameBufferSlot, NoPin, PanelDriver,
    PixelFormat,
};

static FLUSH: FlushSignal = FlushSignal::new();

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ST7796 bring-up demo");
    println!("====================\n");

    let config = DisplayConfig::new(240, 320, PixelFormat::Rgb565);
    let pins = ControlPins::<NoPin, NoPin, NoPin, NoPin>::unbound();
    let mut panel = PanelDriver::new(SimBus::addressed(), St7796, config, pins, &FLUSH)?;

    panel.init(&mut NoopDelay).await?;
    println!(
        "{} ready, {} bytes per framebuffer slot",
        panel.controller_name(),
        panel.frame_buffer_size()
    );

    // Render a frame, then push the full panel.
    panel.frame_buffer(FrameBufferSlot::First).fill(0xFF);
    panel
        .flush(Area::full(240, 320), FrameBufferSlot::First)
        .await?;

    if let Some(pending) = panel.pending_flush() {
        println!(
            "flush in flight: columns {}..={}, rows {}..={}",
            pending.area.x1, pending.area.x2, pending.area.y1, pending.area.y2
        );
    }

    // The bus double plays the completion interrupt on request.
    panel.bus().complete_flush();
    panel.wait_flush_done().await;
    println!("flush complete\n");

    println!("wire traffic:");
    for transaction in panel.bus().transactions() {
        match transaction {
            Transaction::Init {
                width,
                height,
                bits_per_pixel,
            } => println!("  geometry {width} x {height} at {bits_per_pixel} bpp"),
            Transaction::Param { command, data } => {
                println!("  cmd {command:#04X} with {} parameter bytes", data.len());
            }
            Transaction::ParamRead { command, len } => {
                println!("  cmd {command:#04X} reading {len} bytes");
            }
            Transaction::Color {
                command,
                slot,
                area,
            } => println!(
                "  cmd {command:#04X} pixel block {} x {} from slot {}",
                area.width(),
                area.height(),
                slot.index()
            ),
        }
    }
    Ok(())
}

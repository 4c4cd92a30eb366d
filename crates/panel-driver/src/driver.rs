//! Panel lifecycle and flush orchestration.
//!
//! One [`PanelDriver`] mediates between a dirty-rectangle renderer and one
//! controller behind one bus. The driver owns policy: lifecycle order,
//! window addressing, orientation, the at-most-one-in-flight flush rule.
//! The bus owns mechanism: pixel memory, transports, completion interrupts.
//!
//! Lifecycle is linear. A driver is constructed against a validated
//! [`DisplayConfig`], runs its controller's bring-up program exactly once in
//! [`PanelDriver::init`], and is then ready to flush until dropped. A
//! bring-up that fails partway leaves the silicon in an undefined register
//! state; pulse reset and construct a fresh driver rather than re-running.
//!
//! The flush cycle is split in two. [`PanelDriver::flush`] returns once the
//! pixel transfer is submitted; the bus raises the registered
//! [`FlushSignal`] from its completion context (DMA interrupt or vertical
//! sync), and the renderer parks on [`PanelDriver::wait_flush_done`] before
//! touching the submitted framebuffer again.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal_async::delay::DelayNs;

use crate::bus::{Area, BusKind, FrameBufferSlot, PanelBus};
use crate::config::{DisplayConfig, DrawMode};
use crate::controller::{Controller, InitStep};
use crate::dcs;
use crate::error::{ConfigError, PanelError};
use crate::flush::FlushSignal;
use crate::orientation::{madctl_value, ColorOrder, Orientation};
use crate::pins::ControlPins;

/// Where the driver is in its linear lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Constructed; bus geometry is negotiated, no panel traffic yet.
    Constructed,
    /// Bring-up program underway. Observable only after a failed `init`.
    Initializing,
    /// Bring-up complete; flush and orientation changes are accepted.
    Ready,
}

/// The flush currently on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingFlush {
    /// Framebuffer being transferred.
    pub slot: FrameBufferSlot,
    /// Window as submitted: offset-translated, and widened to the full
    /// panel on mapped buses.
    pub area: Area,
}

/// Generic panel driver over a [`PanelBus`] and a [`Controller`].
pub struct PanelDriver<B, C, RST, PWR, BLP, BLD>
where
    B: PanelBus,
    C: Controller,
    RST: OutputPin,
    PWR: OutputPin,
    BLP: OutputPin,
    BLD: SetDutyCycle,
{
    bus: B,
    controller: C,
    config: DisplayConfig,
    pins: ControlPins<RST, PWR, BLP, BLD>,
    flush: &'static FlushSignal,
    orientation: Orientation,
    state: DriverState,
    draw_mode: DrawMode,
    frame_buffer_size: usize,
    in_flight: Option<PendingFlush>,
}

impl<B, C, RST, PWR, BLP, BLD> PanelDriver<B, C, RST, PWR, BLP, BLD>
where
    B: PanelBus,
    C: Controller,
    RST: OutputPin,
    PWR: OutputPin,
    BLP: OutputPin,
    BLD: SetDutyCycle,
{
    /// Build a driver: validate the configuration, negotiate geometry with
    /// the bus, and register the completion signal.
    ///
    /// No panel registers are touched; that is [`Self::init`]'s job.
    pub fn new(
        mut bus: B,
        controller: C,
        config: DisplayConfig,
        pins: ControlPins<RST, PWR, BLP, BLD>,
        flush: &'static FlushSignal,
    ) -> Result<Self, PanelError<B::Error>> {
        config.validate()?;
        bus.init(config.width, config.height, config.format.bits_per_pixel())
            .map_err(PanelError::Bus)?;
        let frame_buffer_size = bus.frame_buffer_size();
        bus.register_flush_signal(flush);
        let draw_mode = match bus.kind() {
            BusKind::Addressed => DrawMode::Partial,
            BusKind::Mapped => DrawMode::Full,
        };
        Ok(Self {
            bus,
            controller,
            config,
            pins,
            flush,
            orientation: Orientation::default(),
            state: DriverState::Constructed,
            draw_mode,
            frame_buffer_size,
            in_flight: None,
        })
    }

    /// Run the controller's bring-up program. Exactly once per driver.
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), PanelError<B::Error>> {
        if self.state != DriverState::Constructed {
            return Err(PanelError::AlreadyInitialized);
        }
        self.state = DriverState::Initializing;

        for step in self.controller.init_sequence() {
            match *step {
                InitStep::Cmd(command, params) => {
                    self.bus
                        .tx_param(command, params)
                        .await
                        .map_err(PanelError::Bus)?;
                }
                InitStep::DelayMs(ms) => delay.delay_ms(ms).await,
                InitStep::Madctl => {
                    let value = self.madctl()?;
                    self.bus
                        .tx_param(dcs::MADCTL, &[value])
                        .await
                        .map_err(PanelError::Bus)?;
                }
                InitStep::PixelFormat => {
                    let code = self
                        .controller
                        .pixel_format_code(self.config.format)
                        .ok_or(ConfigError::PixelFormatUnsupported)?;
                    self.bus
                        .tx_param(dcs::COLMOD, &[code])
                        .await
                        .map_err(PanelError::Bus)?;
                }
            }
        }

        self.state = DriverState::Ready;
        Ok(())
    }

    /// Submit the pixels in `slot` covering `area` (panel coordinates).
    ///
    /// Returns once the transfer is on the wire. Rejected with
    /// [`PanelError::FlushInFlight`] while a previous flush has not
    /// completed; park on [`Self::wait_flush_done`] first. On addressed
    /// buses the window is offset-translated and programmed via `CASET` and
    /// `RASET`; mapped buses take the full panel every time, since the
    /// silicon scans a fixed region.
    pub async fn flush(
        &mut self,
        area: Area,
        slot: FrameBufferSlot,
    ) -> Result<(), PanelError<B::Error>> {
        if self.state != DriverState::Ready {
            return Err(PanelError::NotInitialized);
        }
        if !self.flush.try_begin() {
            return Err(PanelError::FlushInFlight);
        }

        let wire = match self.bus.kind() {
            BusKind::Addressed => area.translated(self.config.offset_x, self.config.offset_y),
            BusKind::Mapped => Area::full(self.config.width, self.config.height),
        };
        self.in_flight = Some(PendingFlush { slot, area: wire });

        if let Err(err) = self.submit(slot, wire).await {
            // Submission never reached the panel; release the latch without
            // waking the renderer.
            self.flush.abort();
            self.in_flight = None;
            return Err(PanelError::Bus(err));
        }
        Ok(())
    }

    async fn submit(&mut self, slot: FrameBufferSlot, wire: Area) -> Result<(), B::Error> {
        if self.bus.kind() == BusKind::Addressed {
            let [x1h, x1l] = wire.x1.to_be_bytes();
            let [x2h, x2l] = wire.x2.to_be_bytes();
            self.bus
                .tx_param(dcs::CASET, &[x1h, x1l, x2h, x2l])
                .await?;
            let [y1h, y1l] = wire.y1.to_be_bytes();
            let [y2h, y2l] = wire.y2.to_be_bytes();
            self.bus
                .tx_param(dcs::RASET, &[y1h, y1l, y2h, y2l])
                .await?;
        }
        self.bus.tx_color(dcs::RAMWR, slot, wire).await
    }

    /// Park until the outstanding flush completes. Resolves immediately
    /// when none is outstanding.
    pub async fn wait_flush_done(&self) {
        self.flush.wait_ready().await;
    }

    /// The flush currently on the wire, if any.
    pub fn pending_flush(&self) -> Option<PendingFlush> {
        if self.flush.is_pending() {
            self.in_flight
        } else {
            None
        }
    }

    /// Change the logical rotation.
    ///
    /// The value is validated against the controller's rotation table
    /// immediately. Before `init` the change is memory-only and the
    /// bring-up program picks it up; once ready it is pushed to the panel
    /// as a single register write.
    pub async fn set_orientation(
        &mut self,
        orientation: Orientation,
    ) -> Result<(), PanelError<B::Error>> {
        let value = madctl_value(
            ColorOrder::for_bus(self.bus.kind()),
            orientation,
            self.controller.rotation_table(),
        )?;
        self.orientation = orientation;
        if self.state == DriverState::Ready {
            self.bus
                .tx_param(dcs::MADCTL, &[value])
                .await
                .map_err(PanelError::Bus)?;
        }
        Ok(())
    }

    /// Current logical rotation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pulse the reset line. Refused while a flush is on the wire, since
    /// resetting mid-transfer leaves the bus and silicon disagreeing about
    /// the window state. No-op when the line is unbound.
    pub async fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), PanelError<B::Error>> {
        if self.flush.is_pending() {
            return Err(PanelError::ResetWhileFlushing);
        }
        self.pins.reset(delay).await?;
        Ok(())
    }

    /// Switch panel power; no-op when the line is unbound.
    pub fn set_power(&mut self, on: bool) -> Result<(), PanelError<B::Error>> {
        self.pins.set_power(on)?;
        Ok(())
    }

    /// Logical power state, or `None` when the line is unbound.
    pub fn power(&self) -> Option<bool> {
        self.pins.power()
    }

    /// Set backlight brightness in percent; no-op when unbound.
    pub fn set_backlight(&mut self, percent: u8) -> Result<(), PanelError<B::Error>> {
        self.pins.set_backlight(percent)?;
        Ok(())
    }

    /// Backlight brightness in percent, or `None` when unbound.
    pub fn backlight(&self) -> Option<u8> {
        self.pins.backlight()
    }

    /// Raw register write, for vendor-specific registers the framework has
    /// no step for. Not lifecycle-gated.
    pub async fn set_params(
        &mut self,
        command: u8,
        params: &[u8],
    ) -> Result<(), PanelError<B::Error>> {
        self.bus
            .tx_param(command, params)
            .await
            .map_err(PanelError::Bus)
    }

    /// Raw register read-back into `params`. Not lifecycle-gated.
    pub async fn get_params(
        &mut self,
        command: u8,
        params: &mut [u8],
    ) -> Result<(), PanelError<B::Error>> {
        self.bus
            .rx_param(command, params)
            .await
            .map_err(PanelError::Bus)
    }

    /// Borrow a framebuffer for the renderer to fill. Never the slot
    /// reported by [`Self::pending_flush`].
    pub fn frame_buffer(&mut self, slot: FrameBufferSlot) -> &mut [u8] {
        self.bus.frame_buffer(slot)
    }

    /// Byte size of each framebuffer, as negotiated with the bus.
    pub fn frame_buffer_size(&self) -> usize {
        self.frame_buffer_size
    }

    /// Buffer-delivery mode the renderer should run in.
    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// Lifecycle position.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Panel description this driver was built against.
    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    /// Borrow the bus collaborator.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrow the bus collaborator.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Name of the attached controller, for diagnostics.
    pub fn controller_name(&self) -> &'static str {
        C::NAME
    }

    fn madctl(&self) -> Result<u8, ConfigError> {
        madctl_value(
            ColorOrder::for_bus(self.bus.kind()),
            self.orientation,
            self.controller.rotation_table(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

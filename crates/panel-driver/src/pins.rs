//! Reset, power, and backlight line control.
//!
//! Three independent lines, each optional, each with its own polarity
//! policy. Every bound line is driven to its inactive level at construction
//! so hardware never floats in an undefined state. Getters report the cached
//! logical state; none of the underlying traits offer a read-back path.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal_async::delay::DelayNs;

/// Default reset settle hold.
pub const DEFAULT_RESET_SETTLE_MS: u32 = 120;

/// Polarity policy for a control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Line is asserted by driving high.
    High,
    /// Line is asserted by driving low.
    Low,
}

impl ActiveLevel {
    /// Electrical state expressing logical `on` under this policy.
    const fn state(self, on: bool) -> PinState {
        match (self, on) {
            (Self::High, true) | (Self::Low, false) => PinState::High,
            _ => PinState::Low,
        }
    }
}

/// A control line failed to switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioError;

impl core::fmt::Display for GpioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "control line failed to switch")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GpioError {}

/// Placeholder type for an unbound line slot.
///
/// Lets partially-wired panels name a concrete type for the lines they do
/// not have: `ControlPins::<NoPin, NoPin, NoPin, NoPin>::unbound()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl embedded_hal::digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_hal::pwm::ErrorType for NoPin {
    type Error = Infallible;
}

impl SetDutyCycle for NoPin {
    fn max_duty_cycle(&self) -> u16 {
        0
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SwitchLine: power and discrete backlight
// ---------------------------------------------------------------------------

/// On/off line with an active-polarity policy.
pub struct SwitchLine<P: OutputPin> {
    pin: P,
    active: ActiveLevel,
    on: bool,
}

impl<P: OutputPin> SwitchLine<P> {
    /// Bind the line and drive it to its inactive level.
    pub fn new(pin: P, active: ActiveLevel) -> Result<Self, GpioError> {
        let mut line = Self {
            pin,
            active,
            on: false,
        };
        line.apply()?;
        Ok(line)
    }

    fn apply(&mut self) -> Result<(), GpioError> {
        self.pin
            .set_state(self.active.state(self.on))
            .map_err(|_| GpioError)
    }

    /// Switch the line.
    pub fn set(&mut self, on: bool) -> Result<(), GpioError> {
        self.on = on;
        self.apply()
    }

    /// Logical state last set.
    pub fn get(&self) -> bool {
        self.on
    }
}

// ---------------------------------------------------------------------------
// ResetLine
// ---------------------------------------------------------------------------

/// Reset line with a configurable settle hold.
pub struct ResetLine<P: OutputPin> {
    pin: P,
    active: ActiveLevel,
    settle_ms: u32,
}

impl<P: OutputPin> ResetLine<P> {
    /// Bind the line, released (inactive), with the default settle hold.
    pub fn new(pin: P, active: ActiveLevel) -> Result<Self, GpioError> {
        let mut line = Self {
            pin,
            active,
            settle_ms: DEFAULT_RESET_SETTLE_MS,
        };
        line.pin
            .set_state(line.active.state(false))
            .map_err(|_| GpioError)?;
        Ok(line)
    }

    /// Same line with a different settle hold.
    #[must_use]
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Configured settle hold in milliseconds.
    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    /// Assert reset, hold for the settle time, release.
    pub async fn pulse<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), GpioError> {
        self.pin
            .set_state(self.active.state(true))
            .map_err(|_| GpioError)?;
        delay.delay_ms(self.settle_ms).await;
        self.pin
            .set_state(self.active.state(false))
            .map_err(|_| GpioError)
    }
}

// ---------------------------------------------------------------------------
// Backlight
// ---------------------------------------------------------------------------

/// PWM-driven backlight, addressed in whole percent.
pub struct PwmBacklight<D: SetDutyCycle> {
    channel: D,
    percent: u8,
}

impl<D: SetDutyCycle> PwmBacklight<D> {
    /// Bind the channel at duty 0.
    pub fn new(mut channel: D) -> Result<Self, GpioError> {
        channel.set_duty_cycle(0).map_err(|_| GpioError)?;
        Ok(Self {
            channel,
            percent: 0,
        })
    }

    /// Set brightness. Values above 100 clamp to 100; 100 maps to exactly
    /// the channel's maximum duty, 0 to exactly zero.
    #[allow(clippy::arithmetic_side_effects)] // Safety: max * percent <= 65_535 * 100, fits u32
    #[allow(clippy::cast_possible_truncation)] // Safety: duty <= max_duty_cycle, a u16
    pub fn set_percent(&mut self, percent: u8) -> Result<(), GpioError> {
        let percent = percent.min(100);
        let max = self.channel.max_duty_cycle();
        let duty = (u32::from(max) * u32::from(percent) / 100) as u16;
        self.channel.set_duty_cycle(duty).map_err(|_| GpioError)?;
        self.percent = percent;
        Ok(())
    }

    /// Brightness last set.
    pub fn percent(&self) -> u8 {
        self.percent
    }
}

/// Backlight binding: a discrete switch or a PWM channel.
pub enum Backlight<P: OutputPin, D: SetDutyCycle> {
    /// On/off line; any non-zero percentage switches it on.
    Switch(SwitchLine<P>),
    /// Dimmable channel.
    Pwm(PwmBacklight<D>),
}

impl<P: OutputPin, D: SetDutyCycle> Backlight<P, D> {
    /// Set brightness in percent.
    pub fn set_percent(&mut self, percent: u8) -> Result<(), GpioError> {
        match self {
            Self::Switch(line) => line.set(percent > 0),
            Self::Pwm(backlight) => backlight.set_percent(percent),
        }
    }

    /// Brightness last set; discrete lines report 100 or 0.
    pub fn percent(&self) -> u8 {
        match self {
            Self::Switch(line) => {
                if line.get() {
                    100
                } else {
                    0
                }
            }
            Self::Pwm(backlight) => backlight.percent(),
        }
    }
}

// ---------------------------------------------------------------------------
// ControlPins aggregate
// ---------------------------------------------------------------------------

/// The up-to-three control lines of one panel.
///
/// Each line is optional; reading an unbound line yields `None` and driving
/// one is a no-op, so partially-wired panels need no special casing.
pub struct ControlPins<RST, PWR, BLP, BLD>
where
    RST: OutputPin,
    PWR: OutputPin,
    BLP: OutputPin,
    BLD: SetDutyCycle,
{
    reset: Option<ResetLine<RST>>,
    power: Option<SwitchLine<PWR>>,
    backlight: Option<Backlight<BLP, BLD>>,
}

impl<RST, PWR, BLP, BLD> ControlPins<RST, PWR, BLP, BLD>
where
    RST: OutputPin,
    PWR: OutputPin,
    BLP: OutputPin,
    BLD: SetDutyCycle,
{
    /// Aggregate already-bound lines. Each line was driven inactive by its
    /// own constructor.
    pub fn new(
        reset: Option<ResetLine<RST>>,
        power: Option<SwitchLine<PWR>>,
        backlight: Option<Backlight<BLP, BLD>>,
    ) -> Self {
        Self {
            reset,
            power,
            backlight,
        }
    }

    /// No lines at all.
    pub const fn unbound() -> Self {
        Self {
            reset: None,
            power: None,
            backlight: None,
        }
    }

    /// Pulse the reset line; no-op when unbound.
    pub async fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), GpioError> {
        match &mut self.reset {
            Some(line) => line.pulse(delay).await,
            None => Ok(()),
        }
    }

    /// Switch panel power; no-op when unbound.
    pub fn set_power(&mut self, on: bool) -> Result<(), GpioError> {
        match &mut self.power {
            Some(line) => line.set(on),
            None => Ok(()),
        }
    }

    /// Logical power state, or `None` when unbound.
    pub fn power(&self) -> Option<bool> {
        self.power.as_ref().map(SwitchLine::get)
    }

    /// Set backlight brightness in percent; no-op when unbound.
    pub fn set_backlight(&mut self, percent: u8) -> Result<(), GpioError> {
        match &mut self.backlight {
            Some(backlight) => backlight.set_percent(percent),
            None => Ok(()),
        }
    }

    /// Backlight brightness in percent, or `None` when unbound.
    pub fn backlight(&self) -> Option<u8> {
        self.backlight.as_ref().map(Backlight::percent)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

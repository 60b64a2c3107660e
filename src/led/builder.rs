//! Builder pattern for TimedLed.

use crate::config::units::{FadeStep, Millis};
use crate::config::{require_led, FadeProfile, LedConfig, SystemConfig};
use crate::error::{truncated, ConfigError, Error, Result};
use crate::hal::{Clock, LedPin};

use super::driver::TimedLed;
use super::mode::ModeKind;
use super::state::{FadeState, LedState};

/// Builder for creating TimedLed instances.
pub struct TimedLedBuilder<PIN, CLOCK>
where
    PIN: LedPin,
    CLOCK: Clock,
{
    pin: Option<PIN>,
    clock: Option<CLOCK>,
    config: LedConfig,
}

impl<PIN, CLOCK> Default for TimedLedBuilder<PIN, CLOCK>
where
    PIN: LedPin,
    CLOCK: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<PIN, CLOCK> TimedLedBuilder<PIN, CLOCK>
where
    PIN: LedPin,
    CLOCK: Clock,
{
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            pin: None,
            clock: None,
            config: LedConfig::default(),
        }
    }

    /// Set the output pin.
    pub fn pin(mut self, pin: PIN) -> Self {
        self.pin = Some(pin);
        self
    }

    /// Set the time source.
    pub fn clock(mut self, clock: CLOCK) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the LED name, cut to 32 bytes.
    pub fn name(mut self, name: &str) -> Self {
        self.config.name = truncated(name);
        self
    }

    /// Set the starting mode.
    pub fn mode(mut self, mode: ModeKind) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the starting state.
    pub fn state(mut self, state: LedState) -> Self {
        self.config.state = state;
        self
    }

    /// Set the starting brightness.
    pub fn brightness(mut self, level: u8) -> Self {
        self.config.brightness = level;
        self
    }

    /// Set the blink on-cycle.
    pub fn on_interval(mut self, interval: Millis) -> Self {
        self.config.on_interval = interval;
        self
    }

    /// Set the blink off-cycle, which is also the fade pause.
    pub fn off_interval(mut self, interval: Millis) -> Self {
        self.config.off_interval = interval;
        self
    }

    /// Set the fade step.
    pub fn fade_step(mut self, step: FadeStep) -> Self {
        self.config.fade_step = step;
        self
    }

    /// Set the delay between fade ticks.
    pub fn fade_delay(mut self, delay: Millis) -> Self {
        self.config.fade_delay = delay;
        self
    }

    /// Set fade step and delay from a preset.
    pub fn fade_profile(mut self, profile: FadeProfile) -> Self {
        self.config.fade_step = profile.step;
        self.config.fade_delay = profile.delay;
        self
    }

    /// Set the starting fade phase.
    pub fn fade_state(mut self, state: FadeState) -> Self {
        self.config.fade_state = state;
        self
    }

    /// Invert hardware writes for LEDs that light on a low pin.
    pub fn active_low(mut self, active_low: bool) -> Self {
        self.config.active_low = active_low;
        self
    }

    /// Configure from a LedConfig.
    pub fn from_led_config(mut self, config: &LedConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Configure from SystemConfig by LED name.
    pub fn from_config(self, config: &SystemConfig, led_name: &str) -> Result<Self> {
        let led_config = require_led(config, led_name)?;
        Ok(self.from_led_config(led_config))
    }

    /// Build the TimedLed.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin or clock is missing, or the configuration
    /// is inconsistent.
    pub fn build(self) -> Result<TimedLed<PIN, CLOCK>> {
        let pin = self
            .pin
            .ok_or(Error::Config(ConfigError::MissingField("pin")))?;

        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::MissingField("clock")))?;

        TimedLed::from_config(pin, clock, &self.config)
    }
}

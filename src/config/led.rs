//! LED configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::led::{BlinkTiming, FadeState, FadeTiming, LedState, Mode, ModeKind};

use super::profile::FadeProfile;
use super::units::{FadeStep, Millis};

/// Default on-cycle of a blink.
pub const DEFAULT_ON_INTERVAL: Millis = Millis(100);
/// Default off-cycle of a blink.
pub const DEFAULT_OFF_INTERVAL: Millis = Millis(900);
/// Default brightness.
pub const DEFAULT_BRIGHTNESS: u8 = 255;
/// Default fade step.
pub const DEFAULT_FADE_STEP: u8 = 2;
/// Default delay between fade ticks.
pub const DEFAULT_FADE_DELAY: Millis = Millis(5);
/// Default dark pause between two fade cycles.
pub const DEFAULT_FADE_PAUSE: Millis = Millis(500);

/// Complete LED configuration.
///
/// Every field except `name` has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Starting mode.
    #[serde(default)]
    pub mode: ModeKind,

    /// Starting output state.
    #[serde(default)]
    pub state: LedState,

    /// Starting brightness (0-255).
    #[serde(default = "default_brightness")]
    pub brightness: u8,

    /// On-cycle while blinking.
    #[serde(default = "default_on_interval", rename = "on_interval_ms")]
    pub on_interval: Millis,

    /// Off-cycle while blinking, and dark pause while fading.
    #[serde(default = "default_off_interval", rename = "off_interval_ms")]
    pub off_interval: Millis,

    /// Brightness change per fade tick.
    #[serde(default = "default_fade_step")]
    pub fade_step: FadeStep,

    /// Minimum time between fade ticks.
    #[serde(default = "default_fade_delay", rename = "fade_delay_ms")]
    pub fade_delay: Millis,

    /// Starting fade phase.
    #[serde(default)]
    pub fade_state: FadeState,

    /// The LED lights when the pin is driven low.
    #[serde(default)]
    pub active_low: bool,
}

fn default_brightness() -> u8 {
    DEFAULT_BRIGHTNESS
}

fn default_on_interval() -> Millis {
    DEFAULT_ON_INTERVAL
}

fn default_off_interval() -> Millis {
    DEFAULT_OFF_INTERVAL
}

fn default_fade_step() -> FadeStep {
    FadeProfile::DEFAULT.step
}

fn default_fade_delay() -> Millis {
    DEFAULT_FADE_DELAY
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            name: String::try_from("led").unwrap_or_default(),
            mode: ModeKind::default(),
            state: LedState::default(),
            brightness: DEFAULT_BRIGHTNESS,
            on_interval: DEFAULT_ON_INTERVAL,
            off_interval: DEFAULT_OFF_INTERVAL,
            fade_step: default_fade_step(),
            fade_delay: DEFAULT_FADE_DELAY,
            fade_state: FadeState::default(),
            active_low: false,
        }
    }
}

impl LedConfig {
    /// Defaults with the given starting mode.
    pub fn with_mode(mode: ModeKind) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Fade step and delay as a profile.
    pub fn fade_profile(&self) -> FadeProfile {
        FadeProfile::new(self.fade_step, self.fade_delay)
    }

    /// Mode the LED starts in.
    ///
    /// While fading, `off_interval` is the dark pause between cycles.
    pub fn initial_mode(&self) -> Mode {
        match self.mode {
            ModeKind::Continuous => Mode::Continuous,
            ModeKind::Blinking => Mode::Blinking(BlinkTiming {
                on: self.on_interval,
                off: self.off_interval,
            }),
            ModeKind::Fading => Mode::Fading(FadeTiming {
                state: self.fade_state,
                step: self.fade_step,
                delay: self.fade_delay,
                pause: self.off_interval,
            }),
        }
    }

    /// Brightness the LED starts with once the state is taken into account.
    ///
    /// An `Off` LED always starts at 0.
    pub fn effective_brightness(&self) -> u8 {
        match self.state {
            LedState::Off => 0,
            LedState::On => self.brightness,
        }
    }

    /// Check this configuration on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InconsistentBrightness` if the LED is on with
    /// brightness 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.state == LedState::On && self.brightness == 0 {
            return Err(ConfigError::InconsistentBrightness);
        }
        Ok(())
    }
}

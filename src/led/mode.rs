//! Operating modes.
//!
//! A LED is in exactly one mode at a time. The fade phase only exists inside
//! [`Mode::Fading`].

use serde::Deserialize;

use crate::config::units::{FadeStep, Millis};
use crate::config::FadeProfile;

use super::state::{FadeState, LedState};

/// Mode selector without parameters, as found in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// Steady output.
    #[default]
    Continuous,
    /// Periodic on/off.
    Blinking,
    /// Breathing brightness ramp.
    Fading,
}

/// On/off durations of a blink cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkTiming {
    /// How long the LED stays on.
    pub on: Millis,
    /// How long the LED stays off.
    pub off: Millis,
}

impl BlinkTiming {
    /// Duration of the phase the LED is currently in.
    #[inline]
    pub const fn interval_for(&self, state: LedState) -> Millis {
        match state {
            LedState::On => self.on,
            LedState::Off => self.off,
        }
    }

    /// Length of one full on+off period.
    #[inline]
    pub fn period(&self) -> Millis {
        self.on + self.off
    }
}

/// Parameters and current phase of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeTiming {
    /// Current phase of the breathing cycle.
    pub state: FadeState,
    /// Brightness change per tick.
    pub step: FadeStep,
    /// Minimum time between ticks while rising or falling.
    pub delay: Millis,
    /// How long the LED stays dark between two cycles.
    pub pause: Millis,
}

impl FadeTiming {
    /// A fade that starts rising from the given profile.
    pub const fn rising(profile: FadeProfile, pause: Millis) -> Self {
        Self {
            state: FadeState::Rising,
            step: profile.step,
            delay: profile.delay,
            pause,
        }
    }

    /// Step and delay as a profile.
    pub const fn profile(&self) -> FadeProfile {
        FadeProfile::new(self.step, self.delay)
    }
}

/// Active operating mode with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Output re-asserted on every tick.
    #[default]
    Continuous,
    /// Toggles after the interval of the current state.
    Blinking(BlinkTiming),
    /// Ramps brightness up and down.
    Fading(FadeTiming),
}

impl Mode {
    /// The parameterless kind of this mode.
    pub const fn kind(&self) -> ModeKind {
        match self {
            Mode::Continuous => ModeKind::Continuous,
            Mode::Blinking(_) => ModeKind::Blinking,
            Mode::Fading(_) => ModeKind::Fading,
        }
    }

    /// Current fade phase, if fading.
    pub const fn fade_state(&self) -> Option<FadeState> {
        match self {
            Mode::Fading(fade) => Some(fade.state),
            _ => None,
        }
    }
}

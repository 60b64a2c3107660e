//! Output level and fade sub-state.

use core::ops::Not;

use serde::Deserialize;

/// Logical output level of the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum LedState {
    /// LED dark, brightness 0.
    Off,
    /// LED lit, brightness above 0.
    #[default]
    On,
}

impl LedState {
    /// State implied by a brightness level.
    #[inline]
    pub const fn from_brightness(level: u8) -> Self {
        if level > 0 {
            LedState::On
        } else {
            LedState::Off
        }
    }

    /// Whether the state is `On`.
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }

    /// Get the state name as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            LedState::Off => "Off",
            LedState::On => "On",
        }
    }
}

impl Not for LedState {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on {
            LedState::On
        } else {
            LedState::Off
        }
    }
}

/// Phase of the breathing cycle while fading.
///
/// Cycles `Rising -> Falling -> Paused -> Rising` forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum FadeState {
    /// Brightness increasing.
    #[default]
    Rising,
    /// Brightness decreasing.
    Falling,
    /// Held dark before the next rise.
    Paused,
}

impl FadeState {
    /// Get the phase name as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            FadeState::Rising => "Rising",
            FadeState::Falling => "Falling",
            FadeState::Paused => "Paused",
        }
    }
}

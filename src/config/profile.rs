//! Fade speed presets.

use core::num::NonZeroU8;

use super::units::{FadeStep, Millis};

/// Step size and tick delay of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FadeProfile {
    /// Brightness change per fade tick.
    pub step: FadeStep,
    /// Minimum time between two fade ticks.
    pub delay: Millis,
}

const fn step(value: u8) -> FadeStep {
    match NonZeroU8::new(value) {
        Some(v) => FadeStep::from_const(v),
        None => panic!("fade step must be non-zero"),
    }
}

impl FadeProfile {
    /// Default fade: step 2, 5 ms per tick.
    pub const DEFAULT: Self = Self::new(step(2), Millis(5));
    /// Slow fade: step 5, 30 ms per tick.
    pub const SLOW: Self = Self::new(step(5), Millis(30));
    /// Fast fade: step 5, 5 ms per tick.
    pub const FAST: Self = Self::new(step(5), Millis(5));

    /// Create a new profile.
    pub const fn new(step: FadeStep, delay: Millis) -> Self {
        Self { step, delay }
    }

    /// Number of ticks from 0 up to the last level not above 255.
    pub const fn rising_ticks(&self) -> u32 {
        255 / self.step.value() as u32
    }
}

impl Default for FadeProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(FadeProfile::DEFAULT.step.value(), 2);
        assert_eq!(FadeProfile::DEFAULT.delay, Millis(5));
        assert_eq!(FadeProfile::SLOW.step.value(), 5);
        assert_eq!(FadeProfile::SLOW.delay, Millis(30));
        assert_eq!(FadeProfile::FAST.step.value(), 5);
        assert_eq!(FadeProfile::FAST.delay, Millis(5));
    }

    #[test]
    fn test_rising_ticks() {
        assert_eq!(FadeProfile::DEFAULT.rising_ticks(), 127);
        assert_eq!(FadeProfile::FAST.rising_ticks(), 51);
    }
}

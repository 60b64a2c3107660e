//! Unit types for LED timing and fading.
//!
//! Provides type-safe representations of millisecond timestamps/durations and
//! fade step sizes to prevent mixing raw integers at compile time.

use core::num::NonZeroU8;
use core::ops::Add;

use serde::Deserialize;

use crate::error::ConfigError;

/// Milliseconds on a wrapping `u32` counter.
///
/// Used both for clock readings and for durations. All arithmetic wraps, so the
/// elapsed time between two readings stays correct when the counter overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millis(pub u32);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Create a new Millis value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`, modulo 2^32.
    #[inline]
    pub const fn elapsed_since(self, earlier: Millis) -> Millis {
        Self(self.0.wrapping_sub(earlier.0))
    }

    /// Whether at least `duration` has elapsed from `earlier` to `self`.
    #[inline]
    pub const fn has_elapsed(self, earlier: Millis, duration: Millis) -> bool {
        self.elapsed_since(earlier).0 >= duration.0
    }
}

impl Add for Millis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl From<u32> for Millis {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Brightness increment applied on each fade tick (1-255).
///
/// Validated at construction to be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeStep(NonZeroU8);

impl FadeStep {
    /// Create a new FadeStep with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFadeStep` if the value is zero.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ConfigError::InvalidFadeStep(value))
    }

    /// Get the raw step value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0.get()
    }

    pub(crate) const fn from_const(value: NonZeroU8) -> Self {
        Self(value)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FadeStep {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "FadeStep({})", self.value())
    }
}

impl TryFrom<u8> for FadeStep {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for FadeStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        FadeStep::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Millis.
    fn ms(self) -> Millis;
}

impl UnitExt for u32 {
    #[inline]
    fn ms(self) -> Millis {
        Millis(self)
    }
}

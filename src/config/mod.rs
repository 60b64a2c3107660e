//! Configuration module for timed-led.
//!
//! Provides types for loading and validating LED configurations from TOML
//! files (with `std` feature) or building them in code.

mod led;
mod profile;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use led::{
    LedConfig, DEFAULT_BRIGHTNESS, DEFAULT_FADE_DELAY, DEFAULT_FADE_PAUSE, DEFAULT_FADE_STEP,
    DEFAULT_OFF_INTERVAL, DEFAULT_ON_INTERVAL,
};
pub use profile::FadeProfile;
pub use system::{SystemConfig, MAX_LEDS};
pub use validation::validate_config;
pub(crate) use validation::require_led;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{FadeStep, Millis};

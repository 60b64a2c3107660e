//! # timed-led
//!
//! Non-blocking blink and fade control for a single LED pin, with embedded-hal
//! 1.0 support.
//!
//! ## Features
//!
//! - **Never blocks**: call [`TimedLed::update`] from the control loop; it
//!   compares elapsed time against thresholds and returns
//! - **Three modes**: continuous, blinking (separate on/off cycles), fading
//!   (rise, fall, pause, repeat)
//! - **embedded-hal 1.0**: adapters for `OutputPin` and `SetDutyCycle`
//! - **Wrap-safe timing**: elapsed time survives millisecond counter overflow
//! - **Configuration-driven**: describe LEDs in TOML files (with `std`)
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use timed_led::{FadeProfile, LedState, Millis, PwmPin, TimedLed};
//!
//! let mut led = TimedLed::new(PwmPin::new(channel), &clock);
//! led.init()?;
//! led.set_asynchronous_blinking(LedState::On, Millis(100), Millis(900))?;
//!
//! loop {
//!     led.update()?;
//!     // other cooperative work
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`hal::StdClock`]
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

mod log;

// Core modules
pub mod config;
pub mod error;
pub mod hal;
pub mod led;

// Re-exports for ergonomic API
pub use config::{validate_config, FadeProfile, LedConfig, SystemConfig};
pub use error::{Error, Result};
pub use hal::{Clock, DigitalPin, FnClock, LedPin, PwmPin};
pub use led::{FadeState, LedState, Mode, ModeKind, TimedLed, TimedLedBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{FadeStep, Millis, UnitExt};

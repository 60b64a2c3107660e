//! LED module for timed-led.
//!
//! Provides the non-blocking LED state machine and its construction helpers.

mod builder;
mod driver;
mod mode;
mod state;

pub use builder::TimedLedBuilder;
pub use driver::TimedLed;
pub use mode::{BlinkTiming, FadeTiming, Mode, ModeKind};
pub use state::{FadeState, LedState};

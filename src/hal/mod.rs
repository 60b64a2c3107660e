//! Hardware collaborators: time source and output pin.

mod clock;
mod pin;

#[cfg(feature = "std")]
pub use clock::StdClock;
pub use clock::{Clock, FnClock};
pub use pin::{DigitalPin, LedPin, PwmPin, DIGITAL_THRESHOLD, MAX_INTENSITY};

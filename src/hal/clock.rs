//! Millisecond time sources.

use crate::config::units::Millis;

/// Monotonic millisecond counter, polled by the LED on every operation that
/// needs a timestamp.
///
/// The counter is allowed to wrap at `u32::MAX`; all elapsed-time arithmetic
/// in this crate is wrapping.
pub trait Clock {
    /// Current reading of the counter.
    fn now(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Millis {
        (**self).now()
    }
}

/// Clock backed by a closure returning raw milliseconds.
///
/// Handy for wiring a HAL timer, e.g. `FnClock::new(|| timer.millis())`.
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(F);

impl<F> FnClock<F>
where
    F: Fn() -> u32,
{
    /// Wrap a closure.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Clock for FnClock<F>
where
    F: Fn() -> u32,
{
    #[inline]
    fn now(&self) -> Millis {
        Millis((self.0)())
    }
}

/// Host clock measuring time since its creation (std only).
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now(&self) -> Millis {
        // Truncation wraps like a hardware millisecond counter.
        Millis(self.start.elapsed().as_millis() as u32)
    }
}

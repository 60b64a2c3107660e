//! Output pin abstraction.
//!
//! [`LedPin`] is the capability the LED needs from hardware. Adapters cover
//! the two embedded-hal 1.0 pin kinds an LED is usually wired to.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Full-scale intensity.
pub const MAX_INTENSITY: u8 = u8::MAX;

/// Intensity at and above which a pin without PWM is driven high.
pub const DIGITAL_THRESHOLD: u8 = 128;

/// Hardware operations an LED output needs.
pub trait LedPin {
    /// Error reported by the underlying hardware.
    type Error;

    /// Put the pin in output mode.
    ///
    /// Pins whose type already guarantees output mode can keep the default.
    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Drive the pin fully on (`true`) or fully off (`false`).
    fn write_level(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Drive the pin to an intensity in 0..=255.
    fn write_intensity(&mut self, level: u8) -> Result<(), Self::Error>;
}

impl<T: LedPin + ?Sized> LedPin for &mut T {
    type Error = T::Error;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        (**self).configure_output()
    }

    fn write_level(&mut self, on: bool) -> Result<(), Self::Error> {
        (**self).write_level(on)
    }

    fn write_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        (**self).write_intensity(level)
    }
}

/// LED on a PWM channel.
#[derive(Debug)]
pub struct PwmPin<P> {
    channel: P,
}

impl<P: SetDutyCycle> PwmPin<P> {
    /// Wrap a PWM channel.
    pub fn new(channel: P) -> Self {
        Self { channel }
    }

    /// Get the wrapped channel back.
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> LedPin for PwmPin<P> {
    type Error = P::Error;

    fn write_level(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.channel.set_duty_cycle_fully_on()
        } else {
            self.channel.set_duty_cycle_fully_off()
        }
    }

    fn write_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        self.channel
            .set_duty_cycle_fraction(u16::from(level), u16::from(MAX_INTENSITY))
    }
}

/// LED on a plain GPIO without PWM.
///
/// Intensities at or above [`DIGITAL_THRESHOLD`] drive the pin high, lower
/// ones drive it low.
#[derive(Debug)]
pub struct DigitalPin<P> {
    pin: P,
}

impl<P: OutputPin> DigitalPin<P> {
    /// Wrap an output pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Get the wrapped pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> LedPin for DigitalPin<P> {
    type Error = P::Error;

    fn write_level(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }

    fn write_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        self.write_level(level >= DIGITAL_THRESHOLD)
    }
}

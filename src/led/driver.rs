//! Timed LED driver.
//!
//! Generic over an [`LedPin`] and a [`Clock`]. Nothing here blocks: timed
//! behaviour advances only when [`TimedLed::update`] is polled.

use heapless::String;

use crate::config::units::{FadeStep, Millis};
use crate::config::{FadeProfile, LedConfig};
use crate::error::{Error, LedError, Result};
use crate::hal::{Clock, LedPin, MAX_INTENSITY};
use crate::log::{debug, trace};

use super::builder::TimedLedBuilder;
use super::mode::{BlinkTiming, FadeTiming, Mode, ModeKind};
use super::state::{FadeState, LedState};

/// Non-blocking LED with continuous, blinking and fading modes.
///
/// Generic over:
/// - `PIN`: output pin (must implement [`LedPin`])
/// - `CLOCK`: millisecond time source (must implement [`Clock`])
///
/// Invariant: `brightness() == 0` exactly when `state()` is `Off`.
pub struct TimedLed<PIN, CLOCK>
where
    PIN: LedPin,
    CLOCK: Clock,
{
    /// Output pin.
    pin: PIN,

    /// Time source for all timestamps.
    clock: CLOCK,

    /// LED name for logging/debugging.
    name: String<32>,

    /// Logical output state.
    state: LedState,

    /// Logical intensity, 0 when off.
    brightness: u8,

    /// Active mode and its parameters.
    mode: Mode,

    /// Clock reading of the last state or brightness change.
    last_change: Millis,

    /// Whether hardware writes are inverted.
    active_low: bool,

    /// Set once `init` configured the pin.
    initialized: bool,
}

impl<PIN, CLOCK> TimedLed<PIN, CLOCK>
where
    PIN: LedPin,
    CLOCK: Clock,
{
    /// Create a continuously lit LED at full brightness.
    ///
    /// No hardware is touched until [`init`](Self::init).
    pub fn new(pin: PIN, clock: CLOCK) -> Self {
        Self::assemble(pin, clock, &LedConfig::default())
    }

    /// Create an LED in the given mode with default timings, starting on.
    pub fn with_mode(pin: PIN, clock: CLOCK, mode: ModeKind) -> Self {
        Self::assemble(pin, clock, &LedConfig::with_mode(mode))
    }

    /// Create an LED from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InconsistentBrightness` if the configuration
    /// asks for an `On` LED with brightness 0.
    pub fn from_config(pin: PIN, clock: CLOCK, config: &LedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(pin, clock, config))
    }

    /// Start a builder.
    pub fn builder() -> TimedLedBuilder<PIN, CLOCK> {
        TimedLedBuilder::new()
    }

    fn assemble(pin: PIN, clock: CLOCK, config: &LedConfig) -> Self {
        let brightness = config.effective_brightness();
        let last_change = clock.now();
        Self {
            pin,
            clock,
            name: config.name.clone(),
            state: LedState::from_brightness(brightness),
            brightness,
            mode: config.initial_mode(),
            last_change,
            active_low: config.active_low,
            initialized: false,
        }
    }

    /// Configure the pin as output and drive it to the current state.
    ///
    /// Must be called once before the first [`update`](Self::update).
    pub fn init(&mut self) -> Result<()> {
        self.pin.configure_output().map_err(|_| LedError::PinError)?;
        self.initialized = true;
        debug!("led init, state {}", self.state);
        self.set_state(self.state)
    }

    /// Set the brightness with one intensity write.
    ///
    /// Level 0 turns the LED `Off`, anything else `On`.
    pub fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.drive_intensity(level)?;
        self.brightness = level;
        self.state = LedState::from_brightness(level);
        self.stamp();
        Ok(())
    }

    /// Switch fully on.
    pub fn turn_on(&mut self) -> Result<()> {
        self.drive_level(true)?;
        self.state = LedState::On;
        self.brightness = MAX_INTENSITY;
        self.stamp();
        Ok(())
    }

    /// Switch fully off.
    pub fn turn_off(&mut self) -> Result<()> {
        self.drive_level(false)?;
        self.state = LedState::Off;
        self.brightness = 0;
        self.stamp();
        Ok(())
    }

    /// Switch to the opposite state.
    pub fn toggle(&mut self) -> Result<()> {
        self.set_state(!self.state)
    }

    /// Switch fully on or off.
    pub fn set_state(&mut self, requested: LedState) -> Result<()> {
        match requested {
            LedState::On => self.turn_on(),
            LedState::Off => self.turn_off(),
        }
    }

    /// Hold a steady output.
    ///
    /// Re-runs [`init`](Self::init), then drives `state`.
    pub fn set_continuous_mode(&mut self, state: LedState) -> Result<()> {
        self.init()?;
        self.set_state(state)?;
        self.enter(Mode::Continuous);
        Ok(())
    }

    /// Blink with equal on and off durations.
    pub fn set_synchronous_blinking(&mut self, start: LedState, interval: Millis) -> Result<()> {
        self.set_asynchronous_blinking(start, interval, interval)
    }

    /// Blink with separate on and off durations, starting in `start`.
    pub fn set_asynchronous_blinking(
        &mut self,
        start: LedState,
        on_interval: Millis,
        off_interval: Millis,
    ) -> Result<()> {
        self.init()?;
        self.set_state(start)?;
        self.enter(Mode::Blinking(BlinkTiming {
            on: on_interval,
            off: off_interval,
        }));
        Ok(())
    }

    /// Breathe with an explicit step, tick delay and dark pause.
    ///
    /// The LED restarts dark and rising. The pin is not written until the
    /// next [`update`](Self::update).
    pub fn set_fade_mode(&mut self, step: FadeStep, delay: Millis, pause: Millis) {
        self.set_fade_profile(FadeProfile::new(step, delay), pause);
    }

    /// Breathe with a preset step and delay.
    pub fn set_fade_profile(&mut self, profile: FadeProfile, pause: Millis) {
        self.brightness = 0;
        self.state = LedState::Off;
        self.stamp();
        self.enter(Mode::Fading(FadeTiming::rising(profile, pause)));
    }

    /// Breathe with [`FadeProfile::DEFAULT`].
    ///
    /// Pass [`DEFAULT_FADE_PAUSE`](crate::config::DEFAULT_FADE_PAUSE) as
    /// `pause` for the stock 500 ms dark pause.
    pub fn set_fade_mode_default(&mut self, pause: Millis) {
        self.set_fade_profile(FadeProfile::DEFAULT, pause);
    }

    /// Breathe with [`FadeProfile::SLOW`].
    pub fn set_fade_mode_slow(&mut self, pause: Millis) {
        self.set_fade_profile(FadeProfile::SLOW, pause);
    }

    /// Breathe with [`FadeProfile::FAST`].
    pub fn set_fade_mode_fast(&mut self, pause: Millis) {
        self.set_fade_profile(FadeProfile::FAST, pause);
    }

    /// Advance timed behaviour. Call on every control-loop iteration.
    ///
    /// Returns immediately after at most one hardware write.
    ///
    /// # Errors
    ///
    /// Returns `LedError::NotInitialized` before [`init`](Self::init) and
    /// `LedError::PinError` if the write fails. A failed write leaves the
    /// LED's state untouched.
    pub fn update(&mut self) -> Result<()> {
        if !self.initialized {
            return Err(Error::Led(LedError::NotInitialized));
        }

        let now = self.clock.now();
        let mode = self.mode;
        match mode {
            Mode::Continuous => self.set_state(self.state),
            Mode::Blinking(timing) => {
                if now.has_elapsed(self.last_change, timing.interval_for(self.state)) {
                    trace!("blink toggle from {}", self.state);
                    self.toggle()
                } else {
                    Ok(())
                }
            }
            Mode::Fading(fade) => self.update_fade(now, fade),
        }
    }

    fn update_fade(&mut self, now: Millis, fade: FadeTiming) -> Result<()> {
        let level = i16::from(self.brightness);
        let step = i16::from(fade.step.value());

        match fade.state {
            FadeState::Rising if now.has_elapsed(self.last_change, fade.delay) => {
                match u8::try_from(level + step) {
                    Ok(next) => self.set_brightness(next),
                    Err(_) => {
                        self.set_fade_state(FadeState::Falling, now);
                        Ok(())
                    }
                }
            }
            FadeState::Falling if now.has_elapsed(self.last_change, fade.delay) => {
                match u8::try_from(level - step) {
                    Ok(next) => self.set_brightness(next),
                    Err(_) => {
                        self.set_fade_state(FadeState::Paused, now);
                        Ok(())
                    }
                }
            }
            FadeState::Paused if now.has_elapsed(self.last_change, fade.pause) => {
                self.set_brightness(0)?;
                self.set_fade_state(FadeState::Rising, now);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Get the LED name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the logical output state.
    #[inline]
    pub fn state(&self) -> LedState {
        self.state
    }

    /// Whether the LED is lit.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Get the logical brightness.
    #[inline]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Get the active mode with its parameters.
    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Get the active mode kind.
    #[inline]
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Get the fade phase, if fading.
    #[inline]
    pub fn fade_state(&self) -> Option<FadeState> {
        self.mode.fade_state()
    }

    /// Clock reading of the last state or brightness change.
    #[inline]
    pub fn last_change(&self) -> Millis {
        self.last_change
    }

    /// Time since the last state or brightness change.
    pub fn elapsed(&self) -> Millis {
        self.clock.now().elapsed_since(self.last_change)
    }

    /// Whether [`init`](Self::init) has run.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether hardware writes are inverted.
    #[inline]
    pub fn active_low(&self) -> bool {
        self.active_low
    }

    /// Give back the pin and clock.
    pub fn release(self) -> (PIN, CLOCK) {
        (self.pin, self.clock)
    }

    fn enter(&mut self, mode: Mode) {
        debug!("led mode {}", mode.kind());
        self.mode = mode;
    }

    /// A phase change restarts the delay like a brightness change does.
    fn set_fade_state(&mut self, next: FadeState, at: Millis) {
        if let Mode::Fading(fade) = &mut self.mode {
            trace!("fade {} -> {}", fade.state, next);
            fade.state = next;
            self.last_change = at;
        }
    }

    fn stamp(&mut self) {
        self.last_change = self.clock.now();
    }

    fn drive_level(&mut self, on: bool) -> Result<()> {
        self.pin
            .write_level(on != self.active_low)
            .map_err(|_| Error::Led(LedError::PinError))
    }

    fn drive_intensity(&mut self, level: u8) -> Result<()> {
        let raw = if self.active_low {
            MAX_INTENSITY - level
        } else {
            level
        };
        self.pin
            .write_intensity(raw)
            .map_err(|_| Error::Led(LedError::PinError))
    }
}

//! Shared test doubles: a settable clock and a pin that records every write.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use timed_led::{Clock, LedPin, Millis, TimedLed};

// ============================================================================
// Mock Clock
// ============================================================================

#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn get(&self) -> u32 {
        self.now.get()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}

// ============================================================================
// Recording Pin
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Configure,
    Level(bool),
    Intensity(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed;

#[derive(Debug, Default)]
struct PinLog {
    writes: Vec<Write>,
    fail_next_write: bool,
}

/// Pin whose clones share one write log, so a test can keep a handle while
/// the LED owns the pin.
#[derive(Debug, Clone, Default)]
pub struct RecordingPin {
    log: Rc<RefCell<PinLog>>,
}

impl RecordingPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<Write> {
        self.log.borrow().writes.clone()
    }

    pub fn write_count(&self) -> usize {
        self.log.borrow().writes.len()
    }

    pub fn last(&self) -> Option<Write> {
        self.log.borrow().writes.last().copied()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().writes.clear();
    }

    pub fn fail_next_write(&self) {
        self.log.borrow_mut().fail_next_write = true;
    }

    fn record(&mut self, write: Write) -> Result<(), WriteFailed> {
        let mut log = self.log.borrow_mut();
        if log.fail_next_write {
            log.fail_next_write = false;
            return Err(WriteFailed);
        }
        log.writes.push(write);
        Ok(())
    }
}

impl LedPin for RecordingPin {
    type Error = WriteFailed;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        self.record(Write::Configure)
    }

    fn write_level(&mut self, on: bool) -> Result<(), Self::Error> {
        self.record(Write::Level(on))
    }

    fn write_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        self.record(Write::Intensity(level))
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestLed<'a> = TimedLed<RecordingPin, &'a MockClock>;

/// An initialised LED with an empty write log.
pub fn ready_led(clock: &MockClock) -> (TestLed<'_>, RecordingPin) {
    let pin = RecordingPin::new();
    let mut led = TimedLed::new(pin.clone(), clock);
    led.init().expect("init should succeed");
    pin.clear();
    (led, pin)
}

/// Tick once per millisecond over `times`, returning each write with the
/// time it happened.
pub fn tick_every_ms(
    led: &mut TestLed<'_>,
    clock: &MockClock,
    pin: &RecordingPin,
    times: impl IntoIterator<Item = u32>,
) -> Vec<(u32, Write)> {
    let mut events = Vec::new();
    for t in times {
        clock.set(t);
        let before = pin.write_count();
        led.update().expect("update should succeed");
        assert!(pin.write_count() - before <= 1, "more than one write at t={}", t);
        if pin.write_count() > before {
            events.push((t, pin.last().unwrap()));
        }
        assert_eq!(
            led.brightness() == 0,
            !led.is_on(),
            "brightness/state mismatch at t={}",
            t
        );
    }
    events
}

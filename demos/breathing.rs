//! Status panel example.
//!
//! Demonstrates three LEDs described in TOML and driven from one
//! cooperative loop: a steady power light, an asymmetric heartbeat blink
//! and a breathing indicator.
//!
//! Run with: `cargo run --example breathing`

use std::time::Duration;

use timed_led::{
    config::DEFAULT_FADE_PAUSE, hal::StdClock, parse_config, Clock, LedPin, LedState, Millis,
    Result, TimedLed, UnitExt,
};

/// Console pin that prints level changes.
struct ConsolePin {
    label: &'static str,
    last: Option<u8>,
}

impl ConsolePin {
    fn new(label: &'static str) -> Self {
        Self { label, last: None }
    }

    fn show(&mut self, level: u8) {
        if self.last != Some(level) {
            let bar = "#".repeat(usize::from(level) / 16);
            println!("{:>10} | {:3} {}", self.label, level, bar);
            self.last = Some(level);
        }
    }
}

impl LedPin for ConsolePin {
    type Error = core::convert::Infallible;

    fn write_level(&mut self, on: bool) -> core::result::Result<(), Self::Error> {
        self.show(if on { 255 } else { 0 });
        Ok(())
    }

    fn write_intensity(&mut self, level: u8) -> core::result::Result<(), Self::Error> {
        self.show(level);
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Status Panel Example ===\n");

    let toml_content = r#"
[leds.power]
name = "power"

[leds.heartbeat]
name = "heartbeat"
mode = "blinking"
on_interval_ms = 100
off_interval_ms = 900

[leds.breath]
name = "breath"
mode = "fading"
state = "off"
fade_step = 15
fade_delay_ms = 20
off_interval_ms = 300
"#;

    let config = parse_config(toml_content)?;
    println!("Loaded configuration with {} LED(s)\n", config.len());

    let clock = StdClock::new();
    let mut leds = Vec::new();
    for name in ["power", "heartbeat", "breath"] {
        let mut led = TimedLed::builder()
            .from_config(&config, name)?
            .pin(ConsolePin::new(name))
            .clock(&clock)
            .build()?;
        led.init()?;
        leds.push(led);
    }

    // Run for three seconds, then dim the power light and let the
    // heartbeat breathe instead.
    let run_for = 3_000u32.ms();
    while !clock.now().has_elapsed(Millis::ZERO, run_for) {
        for led in leds.iter_mut() {
            led.update()?;
        }
        std::thread::sleep(Duration::from_millis(1));
    }

    leds[0].set_continuous_mode(LedState::Off)?;
    leds[1].set_fade_mode_default(DEFAULT_FADE_PAUSE);

    println!("\n=== Final States ===");
    for led in &leds {
        println!(
            "{:>10}: {} ({:?}), brightness {}",
            led.name(),
            led.state().name(),
            led.mode_kind(),
            led.brightness()
        );
    }

    Ok(())
}

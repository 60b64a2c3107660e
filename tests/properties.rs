//! Property tests over arbitrary operation sequences.

mod common;

use common::{ready_led, MockClock, Write};
use proptest::prelude::*;
use timed_led::{FadeProfile, FadeState, FadeStep, LedState, Millis};

#[derive(Debug, Clone)]
enum Op {
    Advance(u32),
    Update,
    SetBrightness(u8),
    Toggle,
    Continuous(bool),
    Blink { on: u32, off: u32, start: bool },
    Fade { step: u8, delay: u32, pause: u32 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u32..200).prop_map(Op::Advance),
        6 => Just(Op::Update),
        1 => any::<u8>().prop_map(Op::SetBrightness),
        1 => Just(Op::Toggle),
        1 => any::<bool>().prop_map(Op::Continuous),
        1 => (0u32..300, 0u32..300, any::<bool>())
            .prop_map(|(on, off, start)| Op::Blink { on, off, start }),
        1 => (1u8..=255, 0u32..50, 0u32..300)
            .prop_map(|(step, delay, pause)| Op::Fade { step, delay, pause }),
    ]
}

fn state(on: bool) -> LedState {
    if on {
        LedState::On
    } else {
        LedState::Off
    }
}

proptest! {
    #[test]
    fn brightness_is_zero_exactly_when_off(
        start in any::<u32>(),
        ops in prop::collection::vec(op(), 1..200),
    ) {
        let clock = MockClock::at(start);
        let (mut led, pin) = ready_led(&clock);

        for op in ops {
            let before = pin.write_count();
            match op {
                Op::Advance(ms) => clock.advance(ms),
                Op::Update => {
                    led.update().unwrap();
                    prop_assert!(pin.write_count() - before <= 1);
                }
                Op::SetBrightness(level) => led.set_brightness(level).unwrap(),
                Op::Toggle => led.toggle().unwrap(),
                Op::Continuous(on) => led.set_continuous_mode(state(on)).unwrap(),
                Op::Blink { on, off, start } => led
                    .set_asynchronous_blinking(state(start), Millis(on), Millis(off))
                    .unwrap(),
                Op::Fade { step, delay, pause } => led.set_fade_mode(
                    FadeStep::new(step).unwrap(),
                    Millis(delay),
                    Millis(pause),
                ),
            }
            prop_assert_eq!(led.brightness() == 0, led.state() == LedState::Off);
        }
    }

    #[test]
    fn blink_period_is_independent_of_start_time(
        start in any::<u32>(),
        on in 1u32..100,
        off in 1u32..100,
    ) {
        let clock = MockClock::at(start);
        let (mut led, pin) = ready_led(&clock);
        led.set_asynchronous_blinking(LedState::On, Millis(on), Millis(off)).unwrap();
        pin.clear();

        let mut toggles = Vec::new();
        for offset in 1..=(on + off) {
            clock.set(start.wrapping_add(offset));
            let before = pin.write_count();
            led.update().unwrap();
            if pin.write_count() > before {
                toggles.push((offset, pin.last().unwrap()));
            }
        }

        prop_assert_eq!(
            toggles,
            vec![(on, Write::Level(false)), (on + off, Write::Level(true))]
        );
    }

    #[test]
    fn fade_stays_within_range_and_writes_only_intensity(
        step in 1u8..=255,
        profile_delay in 1u32..10,
        ticks in 1u32..2000,
    ) {
        let clock = MockClock::at(0);
        let (mut led, pin) = ready_led(&clock);
        led.set_fade_profile(
            FadeProfile::new(FadeStep::new(step).unwrap(), Millis(profile_delay)),
            Millis(20),
        );

        for t in 1..=ticks {
            clock.set(t);
            led.update().unwrap();
            if led.fade_state() == Some(FadeState::Paused) {
                prop_assert_eq!(led.brightness(), 0);
            }
        }

        prop_assert!(pin
            .writes()
            .iter()
            .all(|write| matches!(write, Write::Intensity(_))));
    }
}

//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{truncated, ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use timed_led::load_config;
///
/// let config = load_config("leds.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(truncated(&e.to_string()))))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(truncated(e.message()))))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Millis;
    use crate::led::{FadeState, LedState, ModeKind};

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[leds.status]
name = "Status"
"#;

        let config = parse_config(toml).unwrap();
        let led = config.led("status").unwrap();
        assert_eq!(led.mode, ModeKind::Continuous);
        assert_eq!(led.state, LedState::On);
        assert_eq!(led.brightness, 255);
    }

    #[test]
    fn test_parse_blinking_led() {
        let toml = r#"
[leds.heartbeat]
name = "Heartbeat"
mode = "blinking"
state = "off"
on_interval_ms = 50
off_interval_ms = 950
"#;

        let config = parse_config(toml).unwrap();
        let led = config.led("heartbeat").unwrap();
        assert_eq!(led.mode, ModeKind::Blinking);
        assert_eq!(led.state, LedState::Off);
        assert_eq!(led.on_interval, Millis(50));
        assert_eq!(led.off_interval, Millis(950));
    }

    #[test]
    fn test_parse_fading_led() {
        let toml = r#"
[leds.breath]
name = "Breath"
mode = "fading"
fade_step = 5
fade_delay_ms = 30
fade_state = "falling"
off_interval_ms = 500
"#;

        let config = parse_config(toml).unwrap();
        let led = config.led("breath").unwrap();
        assert_eq!(led.mode, ModeKind::Fading);
        assert_eq!(led.fade_step.value(), 5);
        assert_eq!(led.fade_delay, Millis(30));
        assert_eq!(led.fade_state, FadeState::Falling);
    }

    #[test]
    fn test_parse_rejects_zero_fade_step() {
        let toml = r#"
[leds.breath]
name = "Breath"
fade_step = 0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_brightness() {
        let toml = r#"
[leds.status]
name = "Status"
brightness = 256
"#;

        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_runs_validation() {
        let toml = r#"
[leds.status]
name = "Status"
state = "on"
brightness = 0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InconsistentBrightness))
        ));
    }

    #[test]
    fn test_long_parse_error_is_truncated() {
        let mode = "x".repeat(200);
        let toml = format!("[leds.status]\nname = \"Status\"\nmode = \"{}\"\n", mode);

        match parse_config(&toml) {
            Err(Error::Config(ConfigError::ParseError(msg))) => {
                assert!(msg.starts_with("unknown variant"));
                assert_eq!(msg.len(), 128);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/leds.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}

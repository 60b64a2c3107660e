//! Configuration validation.

use crate::error::{truncated, ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - No LED is configured `on` with brightness 0
///
/// Fade steps and brightness ranges are already enforced by the types
/// while parsing.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, led) in config.leds.iter() {
        validate_led(name.as_str(), led)?;
    }

    Ok(())
}

fn validate_led(_name: &str, config: &super::LedConfig) -> Result<()> {
    config.validate().map_err(Error::Config)
}

/// Look up a LED or report it as missing.
pub(crate) fn require_led<'a>(
    config: &'a SystemConfig,
    name: &str,
) -> Result<&'a super::LedConfig> {
    config.led(name).ok_or_else(|| {
        Error::Config(ConfigError::LedNotFound(truncated(name)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedConfig;

    #[test]
    fn test_inconsistent_brightness() {
        let config = LedConfig {
            brightness: 0,
            ..LedConfig::default()
        };

        let result = validate_led("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InconsistentBrightness))
        ));
    }

    #[test]
    fn test_missing_led() {
        let config = SystemConfig::default();
        let result = require_led(&config, "status");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::LedNotFound(ref name))) if name.as_str() == "status"
        ));
    }

    #[test]
    fn test_missing_led_with_long_name() {
        let config = SystemConfig::default();
        let name = "n".repeat(40);
        match require_led(&config, &name) {
            Err(Error::Config(ConfigError::LedNotFound(reported))) => {
                assert_eq!(reported.as_str(), &name[..32]);
            }
            other => panic!("expected LedNotFound, got {:?}", other.err()),
        }
    }
}

//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::led::LedConfig;

/// Maximum number of LEDs in one configuration.
pub const MAX_LEDS: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named LED configurations.
    #[serde(default)]
    pub leds: FnvIndexMap<String<32>, LedConfig, MAX_LEDS>,
}

impl SystemConfig {
    /// Get a LED configuration by name.
    pub fn led(&self, name: &str) -> Option<&LedConfig> {
        self.leds
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all LED names.
    pub fn led_names(&self) -> impl Iterator<Item = &str> {
        self.leds.keys().map(|s| s.as_str())
    }

    /// Number of configured LEDs.
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// Whether no LED is configured.
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            leds: FnvIndexMap::new(),
        }
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timings and tick parameters of the simulated pipelines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chat: ChatConfig,
    pub upload: UploadConfig,
    pub sign_up: SignUpConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// How long the assistant "types" before replying
    pub reply_ms: u32,
    /// How long the voice-input stub "listens"
    pub voice_capture_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub tick_ms: u32,
    /// Upper bound (exclusive) of the random progress step per tick
    pub max_increment: f64,
    /// Duration of the "Run Prototype" processing step
    pub processing_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpConfig {
    pub submit_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub dismiss_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_ms: 1500,
            voice_capture_ms: 2000,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            max_increment: 30.0,
            processing_ms: 3000,
        }
    }
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self { submit_ms: 1500 }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { dismiss_ms: 4000 }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("upload.tick_ms must be greater than zero")]
    ZeroTick,
    #[error("upload.max_increment must be a positive number, got {0}")]
    InvalidIncrement(f64),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[chat]
reply_ms = 1500
voice_capture_ms = 2000

[upload]
tick_ms = 200
max_increment = 30.0
processing_ms = 3000

[sign_up]
submit_ms = 1500

[notifications]
dismiss_ms = 4000
"#;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        let inc = self.upload.max_increment;
        if !inc.is_finite() || inc <= 0.0 {
            return Err(ConfigError::InvalidIncrement(inc));
        }
        Ok(())
    }
}

/// Parse and validate a TOML document. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from an optional override document.
///
/// Search order:
/// 1. The override, if present and valid
/// 2. Falls back to the embedded default config
pub fn load_config(override_toml: Option<&str>) -> Config {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Using configuration override");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.upload.tick_ms, 200);
        assert_eq!(config.chat.reply_ms, 1500);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config("[upload]\ntick_ms = 50\n").unwrap();
        assert_eq!(config.upload.tick_ms, 50);
        assert_eq!(config.upload.max_increment, 30.0);
        assert_eq!(config.sign_up.submit_ms, 1500);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[upload]\ntick_ms = 0\n"));
        assert_eq!(config, Config::default());

        let config = load_config(Some("not = [valid"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_bad_increment() {
        let mut config = Config::default();
        config.upload.max_increment = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidIncrement(-1.0)));
    }
}

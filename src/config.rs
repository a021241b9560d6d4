use std::path::PathBuf;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_BOT_CONFIG_PATH: &str = "bot_config.json";
const DEFAULT_BLACKJACK_TIMEOUT_SECONDS: u64 = 60;

pub struct Config {
    pub discord_bot_token: String,

    /// Guild to register slash commands in. Commands are registered globally when unset.
    pub discord_guild_id: Option<u64>,

    pub bot_config_path: PathBuf,
    pub blackjack_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            discord_guild_id: optional_u64("DISCORD_GUILD_ID")?.filter(|&id| id != 0),
            bot_config_path: std::env::var("BOT_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOT_CONFIG_PATH)),
            blackjack_timeout: blackjack_timeout("BLACKJACK_TIMEOUT_SECONDS")?,
        })
    }
}

/// Reads the blackjack session timeout in seconds.
///
/// # Returns
/// - `Ok(Duration)` - Configured timeout, or 60 seconds when unset
/// - `Err(ConfigError::InvalidEnvVar)` - Not a number, or zero (every game would
///   expire as soon as it starts)
fn blackjack_timeout(name: &str) -> Result<Duration, ConfigError> {
    match optional_u64(name)? {
        None => Ok(Duration::from_secs(DEFAULT_BLACKJACK_TIMEOUT_SECONDS)),
        Some(0) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: "0".to_string(),
        }),
        Some(seconds) => Ok(Duration::from_secs(seconds)),
    }
}

/// Reads an optional numeric environment variable.
///
/// # Returns
/// - `Ok(None)` - Variable is unset or empty
/// - `Ok(Some(u64))` - Variable parsed successfully
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but not a `u64`
fn optional_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

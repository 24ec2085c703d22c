use std::time::Duration;

use crate::{
    error::{config::ConfigError, AppError},
    service::cooldown::{DEFAULT_ROLL_COOLDOWN, DEFAULT_STEAL_COOLDOWN},
};

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Discord ID allowed to run `pic-add` and `pic-give-all`.
    pub owner_id: u64,

    pub roll_cooldown: Duration,
    pub steal_cooldown: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            owner_id: parse("TOOF_OWNER_ID", required("TOOF_OWNER_ID")?)?,
            roll_cooldown: cooldown("ROLL_COOLDOWN_SECONDS", DEFAULT_ROLL_COOLDOWN)?,
            steal_cooldown: cooldown("STEAL_COOLDOWN_SECONDS", DEFAULT_STEAL_COOLDOWN)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse(name: &str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

/// Reads an optional cooldown in whole seconds, falling back to `default` when unset.
fn cooldown(name: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse(name, value).map(Duration::from_secs),
        Err(_) => Ok(default),
    }
}

//! Environment-based configuration.
//!
//! Loaded once at startup after `dotenvy` has populated the process environment.

use std::{fmt::Display, str::FromStr, time::Duration};

use crate::server::{
    command::CommandSettings,
    error::{config::ConfigError, AppError},
    scheduler::unmute::UnmutePolicy,
};

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CLEAR_CONFIRMATION_SECS: u64 = 3;
const DEFAULT_INVITE_PERMISSIONS: u64 = 8;
/// Every five minutes, at second zero.
const DEFAULT_STATS_SNAPSHOT_CRON: &str = "0 */5 * * * *";

#[derive(Clone)]
pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,
    /// Port of the dashboard HTTP API.
    pub port: u16,
    /// `None` when `COMMAND_TIMEOUT_SECS` is 0.
    pub command_timeout: Option<Duration>,
    pub unmute_policy: UnmutePolicy,
    pub clear_confirmation: Duration,
    pub invite_permissions: u64,
    pub stats_snapshot_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present or defaulted
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_BOT_TOKEN` is unset or empty
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable is set but fails to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                tracing::warn!(
                    "DATABASE_URL is not set, using an in-memory database; data is lost on restart"
                );
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        let timeout_secs: u64 =
            parse_or(&lookup, "COMMAND_TIMEOUT_SECS", DEFAULT_COMMAND_TIMEOUT_SECS)?;

        Ok(Self {
            discord_bot_token,
            database_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            command_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            unmute_policy: parse_or(&lookup, "AUTO_UNMUTE_POLICY", UnmutePolicy::default())?,
            clear_confirmation: Duration::from_secs(parse_or(
                &lookup,
                "CLEAR_CONFIRMATION_SECS",
                DEFAULT_CLEAR_CONFIRMATION_SECS,
            )?),
            invite_permissions: parse_or(&lookup, "INVITE_PERMISSIONS", DEFAULT_INVITE_PERMISSIONS)?,
            stats_snapshot_cron: lookup("STATS_SNAPSHOT_CRON")
                .unwrap_or_else(|| DEFAULT_STATS_SNAPSHOT_CRON.to_string()),
        })
    }

    /// Settings handed to command handlers.
    pub fn command_settings(&self) -> CommandSettings {
        CommandSettings {
            timeout: self.command_timeout,
            unmute_policy: self.unmute_policy,
            clear_confirmation: self.clear_confirmation,
            invite_permissions: self.invite_permissions,
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

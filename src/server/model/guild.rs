use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::guild::GuildPrefixDto;

/// Prefix used when a guild has no record or an empty prefix.
pub const DEFAULT_PREFIX: &str = "!";

/// Longest prefix a guild may configure, in characters.
pub const MAX_PREFIX_LEN: usize = 5;

/// Stored configuration and membership state of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRecord {
    pub guild_id: u64,
    pub name: String,
    pub prefix: String,
    pub joined_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl GuildRecord {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - Successfully converted model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            guild_id,
            name: entity.name,
            prefix: entity.prefix,
            joined_at: entity.joined_at,
            left_at: entity.left_at,
            is_active: entity.is_active,
        })
    }

    /// The prefix commands must start with, falling back to the default when unset.
    pub fn effective_prefix(&self) -> &str {
        if self.prefix.is_empty() {
            DEFAULT_PREFIX
        } else {
            &self.prefix
        }
    }

    pub fn into_prefix_dto(self) -> GuildPrefixDto {
        GuildPrefixDto {
            guild_id: self.guild_id.to_string(),
            prefix: self.effective_prefix().to_string(),
        }
    }
}

/// Parameters for recording that the bot joined (or rejoined) a guild.
#[derive(Debug, Clone)]
pub struct UpsertGuildParams {
    pub guild_id: u64,
    pub name: String,
}

/// Checks a requested prefix against the length rule.
///
/// # Returns
/// - `Ok(&str)` - The trimmed prefix
/// - `Err(&'static str)` - The user-facing rejection message
pub fn validate_prefix(prefix: &str) -> Result<&str, &'static str> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err("Prefix cannot be empty!");
    }
    if prefix.chars().count() > MAX_PREFIX_LEN {
        return Err("Prefix cannot be longer than 5 characters!");
    }
    Ok(prefix)
}

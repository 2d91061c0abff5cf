use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::usage::CommandUsageDto;

/// One recorded command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandUsage {
    pub usage_id: String,
    pub guild_id: Option<u64>,
    pub user_id: u64,
    pub command: String,
    pub used_at: DateTime<Utc>,
}

impl CommandUsage {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CommandUsage)` - Successfully converted model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id or user_id as u64
    pub fn from_entity(entity: entity::command_usage::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .map(|id| id.parse::<u64>())
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))?;

        Ok(Self {
            usage_id: entity.usage_id,
            guild_id,
            user_id,
            command: entity.command,
            used_at: entity.used_at,
        })
    }

    pub fn into_dto(self) -> CommandUsageDto {
        CommandUsageDto {
            id: self.usage_id,
            guild_id: self.guild_id.map(|id| id.to_string()),
            user_id: self.user_id.to_string(),
            command: self.command,
            used_at: self.used_at,
        }
    }
}

/// Parameters for recording a command invocation.
#[derive(Debug, Clone)]
pub struct RecordUsageParams {
    pub guild_id: Option<u64>,
    pub user_id: u64,
    pub command: String,
}

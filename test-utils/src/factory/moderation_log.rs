//! Moderation log factory for creating test audit records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test moderation log records.
///
/// The action is stored as its lowercase wire name (`"kick"`, `"mute"`, ...).
pub struct ModerationLogFactory<'a> {
    db: &'a DatabaseConnection,
    log_id: String,
    guild_id: String,
    moderator_id: String,
    target_id: String,
    action: String,
    reason: Option<String>,
    duration: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> ModerationLogFactory<'a> {
    /// Creates a new ModerationLogFactory for a guild.
    ///
    /// Defaults:
    /// - log_id: `"log-{id}"`
    /// - moderator_id / target_id: unique snowflake-like ids
    /// - action: `"kick"`
    /// - no reason or duration
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            log_id: format!("log-{}", id),
            guild_id: guild_id.into(),
            moderator_id: id.to_string(),
            target_id: next_id().to_string(),
            action: "kick".to_string(),
            reason: None,
            duration: None,
            created_at: Utc::now(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = target_id.into();
        self
    }

    pub fn reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    pub fn duration(mut self, duration: Option<i32>) -> Self {
        self.duration = duration;
        self
    }

    /// Builds and inserts the moderation log into the database.
    ///
    /// # Returns
    /// - `Ok(entity::moderation_log::Model)` - Created log record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::moderation_log::Model, DbErr> {
        entity::moderation_log::ActiveModel {
            log_id: ActiveValue::Set(self.log_id),
            guild_id: ActiveValue::Set(self.guild_id),
            moderator_id: ActiveValue::Set(self.moderator_id),
            target_id: ActiveValue::Set(self.target_id),
            action: ActiveValue::Set(self.action),
            reason: ActiveValue::Set(self.reason),
            duration: ActiveValue::Set(self.duration),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a moderation log with default values for a guild.
pub async fn create_moderation_log(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::moderation_log::Model, DbErr> {
    ModerationLogFactory::new(db, guild_id).build().await
}

//! Command usage factory for creating test usage records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test command usage records.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::command_usage::CommandUsageFactory;
///
/// let usage = CommandUsageFactory::new(&db)
///     .command("kick")
///     .guild_id(Some("123".to_string()))
///     .build()
///     .await?;
/// ```
pub struct CommandUsageFactory<'a> {
    db: &'a DatabaseConnection,
    usage_id: String,
    guild_id: Option<String>,
    user_id: String,
    command: String,
    used_at: DateTime<Utc>,
}

impl<'a> CommandUsageFactory<'a> {
    /// Creates a new CommandUsageFactory with default values.
    ///
    /// Defaults:
    /// - usage_id: `"usage-{id}"`
    /// - guild_id: `None` (direct message)
    /// - user_id: unique snowflake-like id
    /// - command: `"ping"`
    /// - used_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            usage_id: format!("usage-{}", id),
            guild_id: None,
            user_id: id.to_string(),
            command: "ping".to_string(),
            used_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: Option<String>) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn used_at(mut self, used_at: DateTime<Utc>) -> Self {
        self.used_at = used_at;
        self
    }

    /// Builds and inserts the usage record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::command_usage::Model)` - Created usage record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::command_usage::Model, DbErr> {
        entity::command_usage::ActiveModel {
            usage_id: ActiveValue::Set(self.usage_id),
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            command: ActiveValue::Set(self.command),
            used_at: ActiveValue::Set(self.used_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a usage record for the given command with default values.
pub async fn create_usage(
    db: &DatabaseConnection,
    command: &str,
) -> Result<entity::command_usage::Model, DbErr> {
    CommandUsageFactory::new(db).command(command).build().await
}

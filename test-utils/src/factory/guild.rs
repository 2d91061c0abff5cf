//! Guild factory for creating test guild records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id("987654321")
///     .prefix("?")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    prefix: String,
    joined_at: DateTime<Utc>,
    left_at: Option<DateTime<Utc>>,
    is_active: bool,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique snowflake-like id
    /// - name: `"Guild {id}"`
    /// - prefix: `"!"`
    /// - joined_at: now
    /// - active, never left
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            name: format!("Guild {}", id),
            prefix: "!".to_string(),
            joined_at: Utc::now(),
            left_at: None,
            is_active: true,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Marks the guild as left at the given time.
    pub fn left_at(mut self, left_at: DateTime<Utc>) -> Self {
        self.left_at = Some(left_at);
        self.is_active = false;
        self
    }

    /// Builds and inserts the guild record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            prefix: ActiveValue::Set(self.prefix),
            joined_at: ActiveValue::Set(self.joined_at),
            left_at: ActiveValue::Set(self.left_at),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild record with default values.
///
/// Shorthand for `GuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}

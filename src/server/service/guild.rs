//! Guild service for prefix and membership bookkeeping.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::GuildRepository,
    error::AppError,
    model::guild::{validate_prefix, GuildRecord, UpsertGuildParams, DEFAULT_PREFIX},
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the prefix commands must start with.
    ///
    /// Direct messages and guilds without a record use the default prefix.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the message came from, `None` for direct messages
    ///
    /// # Returns
    /// - `Ok(String)` - The active prefix
    /// - `Err(AppError::DbErr)` - The guild record could not be read
    pub async fn effective_prefix(&self, guild_id: Option<u64>) -> Result<String, AppError> {
        let Some(guild_id) = guild_id else {
            return Ok(DEFAULT_PREFIX.to_string());
        };

        let record = GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;

        Ok(record
            .map(|r| r.effective_prefix().to_string())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string()))
    }

    pub async fn get(&self, guild_id: u64) -> Result<Option<GuildRecord>, AppError> {
        Ok(GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?)
    }

    /// Validates and stores a new prefix, creating the guild record if missing.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to update
    /// - `name` - Guild name, used only when the record has to be created
    /// - `prefix` - Requested prefix, trimmed before storing
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - The updated record
    /// - `Err(AppError::BadRequest)` - Prefix is empty or longer than 5 characters
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_prefix(
        &self,
        guild_id: u64,
        name: String,
        prefix: &str,
    ) -> Result<GuildRecord, AppError> {
        let prefix = validate_prefix(prefix).map_err(|msg| AppError::BadRequest(msg.to_string()))?;

        let record = GuildRepository::new(self.db)
            .set_prefix(guild_id, name, prefix.to_string())
            .await?;

        tracing::info!("Prefix of guild {} set to '{}'", guild_id, record.prefix);

        Ok(record)
    }

    /// Marks the bot as present in a guild, keeping any configured prefix.
    pub async fn record_join(&self, params: UpsertGuildParams) -> Result<GuildRecord, AppError> {
        Ok(GuildRepository::new(self.db).upsert_joined(params).await?)
    }

    /// Marks the bot as removed from a guild.
    ///
    /// # Returns
    /// - `Ok(true)` - An active record was marked as left
    /// - `Ok(false)` - No active record existed
    pub async fn record_leave(&self, guild_id: u64) -> Result<bool, AppError> {
        Ok(GuildRepository::new(self.db).mark_left(guild_id).await?)
    }

    pub async fn get_active(&self) -> Result<Vec<GuildRecord>, AppError> {
        Ok(GuildRepository::new(self.db).get_active().await?)
    }
}

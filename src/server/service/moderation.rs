//! Moderation audit log service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::ModerationLogRepository,
    error::AppError,
    model::moderation::{CreateModerationLogParams, ModerationLog},
};

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit record for a moderation action that already succeeded.
    pub async fn record(
        &self,
        params: CreateModerationLogParams,
    ) -> Result<ModerationLog, AppError> {
        let log = ModerationLogRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Moderation: {} {} user {} in guild {}",
            log.moderator_id,
            log.action.past_tense(),
            log.target_id,
            log.guild_id
        );

        Ok(log)
    }

    /// The `limit` most recent audit records of one guild, oldest first.
    pub async fn recent_for_guild(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<ModerationLog>, AppError> {
        Ok(ModerationLogRepository::new(self.db)
            .get_recent_for_guild(guild_id, limit)
            .await?)
    }
}

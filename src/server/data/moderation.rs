use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::moderation::{CreateModerationLogParams, ModerationLog},
    util::id::generate_record_id,
};

pub struct ModerationLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a moderation log entry with a fresh id and the current time.
    pub async fn create(&self, params: CreateModerationLogParams) -> Result<ModerationLog, DbErr> {
        let model = entity::moderation_log::ActiveModel {
            log_id: ActiveValue::Set(generate_record_id()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            moderator_id: ActiveValue::Set(params.moderator_id.to_string()),
            target_id: ActiveValue::Set(params.target_id.to_string()),
            action: ActiveValue::Set(params.action.as_str().to_string()),
            reason: ActiveValue::Set(params.reason),
            duration: ActiveValue::Set(params.duration),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ModerationLog::from_entity(model)
    }

    /// Finds a log entry by its public id.
    pub async fn find_by_id(&self, log_id: &str) -> Result<Option<ModerationLog>, DbErr> {
        entity::prelude::ModerationLog::find()
            .filter(entity::moderation_log::Column::LogId.eq(log_id))
            .one(self.db)
            .await?
            .map(ModerationLog::from_entity)
            .transpose()
    }

    /// Gets the most recent `limit` log entries of one guild in insertion order.
    pub async fn get_recent_for_guild(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<ModerationLog>, DbErr> {
        let mut models = entity::prelude::ModerationLog::find()
            .filter(entity::moderation_log::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::moderation_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;
        models.reverse();

        models.into_iter().map(ModerationLog::from_entity).collect()
    }
}

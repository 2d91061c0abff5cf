use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::usage::{CommandUsage, RecordUsageParams},
    util::id::generate_record_id,
};

pub struct CommandUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandUsageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a usage record with a fresh id and the current time.
    pub async fn create(&self, params: RecordUsageParams) -> Result<CommandUsage, DbErr> {
        let model = entity::command_usage::ActiveModel {
            usage_id: ActiveValue::Set(generate_record_id()),
            guild_id: ActiveValue::Set(params.guild_id.map(|id| id.to_string())),
            user_id: ActiveValue::Set(params.user_id.to_string()),
            command: ActiveValue::Set(params.command),
            used_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        CommandUsage::from_entity(model)
    }

    /// Finds a usage record by its public id.
    pub async fn find_by_id(&self, usage_id: &str) -> Result<Option<CommandUsage>, DbErr> {
        entity::prelude::CommandUsage::find()
            .filter(entity::command_usage::Column::UsageId.eq(usage_id))
            .one(self.db)
            .await?
            .map(CommandUsage::from_entity)
            .transpose()
    }

    /// Gets the most recent `limit` usage records in insertion order.
    ///
    /// Returns the suffix of the table: the last `limit` rows, oldest of them first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<CommandUsage>, DbErr> {
        let mut models = entity::prelude::CommandUsage::find()
            .order_by_desc(entity::command_usage::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;
        models.reverse();

        models.into_iter().map(CommandUsage::from_entity).collect()
    }

    /// Total number of recorded invocations.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CommandUsage::find().count(self.db).await
    }
}

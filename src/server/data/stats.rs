use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::stats::{LiveStats, StatsSnapshot};

pub struct BotStatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotStatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a snapshot of the given live counters stamped with the current time.
    pub async fn create(&self, stats: LiveStats) -> Result<StatsSnapshot, DbErr> {
        let model = entity::bot_stats::ActiveModel {
            server_count: ActiveValue::Set(stats.guild_count as i64),
            user_count: ActiveValue::Set(stats.user_count as i64),
            uptime_secs: ActiveValue::Set(stats.uptime_secs as i64),
            commands_executed: ActiveValue::Set(stats.commands_used as i64),
            recorded_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StatsSnapshot::from_entity(model))
    }

    /// Gets the most recent `limit` snapshots, oldest of them first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<StatsSnapshot>, DbErr> {
        let mut models = entity::prelude::BotStats::find()
            .order_by_desc(entity::bot_stats::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;
        models.reverse();

        Ok(models.into_iter().map(StatsSnapshot::from_entity).collect())
    }
}

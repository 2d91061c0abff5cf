//! Bot statistics service.
//!
//! Live counters combine the gateway cache with the usage store; snapshots persist
//! those counters for the dashboard's history view.

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    bot::gateway::DiscordGateway,
    data::{BotStatsRepository, CommandUsageRepository},
    error::AppError,
    model::stats::{LiveStats, StatsSnapshot},
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes current counters.
    ///
    /// # Arguments
    /// - `gateway` - Source of cached guild and user counts
    /// - `uptime` - Time since the process started
    ///
    /// # Returns
    /// - `Ok(LiveStats)` - Counters, with commands used taken from the usage store
    /// - `Err(AppError::DbErr)` - The usage count could not be read
    pub async fn live(
        &self,
        gateway: &dyn DiscordGateway,
        uptime: Duration,
    ) -> Result<LiveStats, AppError> {
        let counts = gateway.cache_counts();
        let commands_used = CommandUsageRepository::new(self.db).count().await?;

        Ok(LiveStats {
            guild_count: counts.guilds,
            user_count: counts.users,
            commands_used,
            uptime_secs: uptime.as_secs(),
        })
    }

    /// Persists a snapshot of the current counters.
    pub async fn snapshot(
        &self,
        gateway: &dyn DiscordGateway,
        uptime: Duration,
    ) -> Result<StatsSnapshot, AppError> {
        let live = self.live(gateway, uptime).await?;
        Ok(BotStatsRepository::new(self.db).create(live).await?)
    }

    /// The `limit` most recent snapshots, oldest first.
    pub async fn history(&self, limit: u64) -> Result<Vec<StatsSnapshot>, AppError> {
        Ok(BotStatsRepository::new(self.db).get_recent(limit).await?)
    }
}

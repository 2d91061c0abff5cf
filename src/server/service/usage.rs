//! Command usage service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::CommandUsageRepository,
    error::AppError,
    model::usage::{CommandUsage, RecordUsageParams},
};

pub struct UsageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a usage record for a command that passed its permission gate.
    pub async fn record(&self, params: RecordUsageParams) -> Result<CommandUsage, AppError> {
        Ok(CommandUsageRepository::new(self.db).create(params).await?)
    }

    /// The `limit` most recent usage records, oldest first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<CommandUsage>, AppError> {
        Ok(CommandUsageRepository::new(self.db).get_recent(limit).await?)
    }
}

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guild_table;
mod m20260301_000002_create_command_usage_table;
mod m20260301_000003_create_moderation_log_table;
mod m20260308_000004_create_bot_stats_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guild_table::Migration),
            Box::new(m20260301_000002_create_command_usage_table::Migration),
            Box::new(m20260301_000003_create_moderation_log_table::Migration),
            Box::new(m20260308_000004_create_bot_stats_table::Migration),
        ]
    }
}

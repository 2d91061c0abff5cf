use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModerationLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ModerationLog::Id))
                    .col(string_uniq(ModerationLog::LogId))
                    .col(string(ModerationLog::GuildId))
                    .col(string(ModerationLog::ModeratorId))
                    .col(string(ModerationLog::TargetId))
                    .col(string(ModerationLog::Action))
                    .col(string_null(ModerationLog::Reason))
                    .col(integer_null(ModerationLog::Duration))
                    .col(timestamp_with_time_zone(ModerationLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Logs are always read per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_moderation_log_guild_id")
                    .table(ModerationLog::Table)
                    .col(ModerationLog::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_moderation_log_guild_id")
                    .table(ModerationLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ModerationLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModerationLog {
    Table,
    Id,
    LogId,
    GuildId,
    ModeratorId,
    TargetId,
    Action,
    Reason,
    Duration,
    CreatedAt,
}

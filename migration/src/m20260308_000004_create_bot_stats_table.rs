use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotStats::Table)
                    .if_not_exists()
                    .col(pk_auto(BotStats::Id))
                    .col(big_integer(BotStats::ServerCount))
                    .col(big_integer(BotStats::UserCount))
                    .col(big_integer(BotStats::UptimeSecs))
                    .col(big_integer(BotStats::CommandsExecuted))
                    .col(
                        timestamp_with_time_zone(BotStats::RecordedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BotStats {
    Table,
    Id,
    ServerCount,
    UserCount,
    UptimeSecs,
    CommandsExecuted,
    RecordedAt,
}

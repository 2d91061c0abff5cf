use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(pk_auto(Guild::Id))
                    .col(string_uniq(Guild::GuildId))
                    .col(string(Guild::Name))
                    .col(string(Guild::Prefix).default("!"))
                    .col(timestamp_with_time_zone(Guild::JoinedAt))
                    .col(timestamp_with_time_zone_null(Guild::LeftAt))
                    .col(boolean(Guild::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    Id,
    GuildId,
    Name,
    Prefix,
    JoinedAt,
    LeftAt,
    IsActive,
}

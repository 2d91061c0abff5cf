use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bot_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_count: i64,
    pub user_count: i64,
    pub uptime_secs: i64,
    pub commands_executed: i64,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

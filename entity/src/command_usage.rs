use sea_orm::entity::prelude::*;

/// One row per permitted command invocation.
///
/// `id` is the insertion sequence; `usage_id` is the public record identifier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "command_usage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub usage_id: String,
    pub guild_id: Option<String>,
    pub user_id: String,
    pub command: String,
    pub used_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

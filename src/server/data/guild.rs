use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::guild::{GuildRecord, UpsertGuildParams, DEFAULT_PREFIX};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guild record by its Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildRecord))`: Guild found, whether active or not
    /// - `Ok(None)`: The bot has never seen this guild
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildRecord>, DbErr> {
        entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(GuildRecord::from_entity)
            .transpose()
    }

    /// Records that the bot is present in a guild.
    ///
    /// Inserts a new active record with the default prefix, or reactivates an existing
    /// one and refreshes its name. A previously configured prefix is kept.
    pub async fn upsert_joined(&self, params: UpsertGuildParams) -> Result<GuildRecord, DbErr> {
        let model = entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            name: ActiveValue::Set(params.name),
            prefix: ActiveValue::Set(DEFAULT_PREFIX.to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
            left_at: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .update_columns([
                    entity::guild::Column::Name,
                    entity::guild::Column::LeftAt,
                    entity::guild::Column::IsActive,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildRecord::from_entity(model)
    }

    /// Sets the command prefix of a guild, creating the record if it is missing.
    ///
    /// `name` is only used when a record has to be created.
    pub async fn set_prefix(
        &self,
        guild_id: u64,
        name: String,
        prefix: String,
    ) -> Result<GuildRecord, DbErr> {
        let model = entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name),
            prefix: ActiveValue::Set(prefix),
            joined_at: ActiveValue::Set(Utc::now()),
            left_at: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .update_column(entity::guild::Column::Prefix)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildRecord::from_entity(model)
    }

    /// Marks a guild as left without deleting it.
    ///
    /// # Returns
    /// - `Ok(true)`: An active record was deactivated
    /// - `Ok(false)`: No active record existed for the guild
    pub async fn mark_left(&self, guild_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Guild::update_many()
            .col_expr(
                entity::guild::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::guild::Column::LeftAt,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .filter(entity::guild::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every guild the bot is currently active in, oldest join first.
    pub async fn get_active(&self) -> Result<Vec<GuildRecord>, DbErr> {
        entity::prelude::Guild::find()
            .filter(entity::guild::Column::IsActive.eq(true))
            .order_by_asc(entity::guild::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildRecord::from_entity)
            .collect()
    }
}

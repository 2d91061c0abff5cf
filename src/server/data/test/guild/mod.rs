use crate::server::{data::guild::GuildRepository, model::guild::UpsertGuildParams};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod get_active;
mod mark_left;
mod set_prefix;
mod upsert_joined;

use crate::server::{
    data::moderation::ModerationLogRepository,
    model::moderation::{CreateModerationLogParams, ModerationAction},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_recent_for_guild;

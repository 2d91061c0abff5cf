use crate::server::{data::usage::CommandUsageRepository, model::usage::RecordUsageParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod find_by_id;
mod get_recent;

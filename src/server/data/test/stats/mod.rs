use crate::server::{data::stats::BotStatsRepository, model::stats::LiveStats};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_recent;

fn live_stats(commands_used: u64) -> LiveStats {
    LiveStats {
        guild_count: 3,
        user_count: 150,
        commands_used,
        uptime_secs: 60,
    }
}

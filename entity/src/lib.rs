//! SeaORM entity models for the bot's persistent store.

pub mod prelude;

pub mod bot_stats;
pub mod command_usage;
pub mod guild;
pub mod moderation_log;

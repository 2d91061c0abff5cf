pub use super::bot_stats::Entity as BotStats;
pub use super::command_usage::Entity as CommandUsage;
pub use super::guild::Entity as Guild;
pub use super::moderation_log::Entity as ModerationLog;

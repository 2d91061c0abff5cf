//! Database repository layer.
//!
//! One repository per table. Repositories use SeaORM entity models internally and
//! return domain models from `server::model`, converting snowflake strings at this
//! boundary.

pub mod guild;
pub mod moderation;
pub mod stats;
pub mod usage;

pub use guild::GuildRepository;
pub use moderation::ModerationLogRepository;
pub use stats::BotStatsRepository;
pub use usage::CommandUsageRepository;

#[cfg(test)]
mod test;

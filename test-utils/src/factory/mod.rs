//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::guild::create_guild(&db).await?;
//!     let usage = factory::command_usage::CommandUsageFactory::new(&db)
//!         .command("ping")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild` - Guild records (prefix, active flag)
//! - `command_usage` - Command usage records
//! - `moderation_log` - Moderation log records
//! - `helpers` - Unique id generation shared by all factories

pub mod command_usage;
pub mod guild;
pub mod helpers;
pub mod moderation_log;

pub use command_usage::create_usage;
pub use guild::create_guild;
pub use moderation_log::create_moderation_log;

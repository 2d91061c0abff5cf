//! Guildwarden Test Utils
//!
//! Shared testing utilities for the bot's repository, service and command tests. The crate
//! offers a builder for test contexts backed by an in-memory SQLite database, entity
//! factories with sensible defaults, and Serenity model fixtures.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::CommandUsage;
//!
//! #[tokio::test]
//! async fn records_usage() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(CommandUsage)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;

//! Serenity model fixtures.
//!
//! Serenity structs are built by deserializing JSON shaped like Discord's API payloads,
//! so tests can feed real model types into the conversions the bot performs on cache
//! and HTTP data (permission resolution, guild overviews).
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_role};
//! use serenity::all::Permissions;
//!
//! let everyone = create_test_role(123, "@everyone", 0, Permissions::empty());
//! let mods = create_test_role(456, "Moderators", 3, Permissions::KICK_MEMBERS);
//! let guild = create_test_guild(123, "Test Guild", 999, &[everyone, mods]);
//! ```

pub mod guild;
pub mod role;

pub use guild::create_test_guild;
pub use role::create_test_role;

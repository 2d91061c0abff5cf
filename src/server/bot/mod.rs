//! Discord bot integration.
//!
//! The bot runs in its own tokio task beside the HTTP server. Event handlers
//! translate serenity events into guild bookkeeping and command dispatch; everything
//! downstream of the handlers talks to Discord through the [`gateway::DiscordGateway`]
//! trait so it can be exercised against a fake in tests.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild create/delete events and the guild cache
//! - `GUILD_MESSAGES` - Message events in guild channels
//! - `MESSAGE_CONTENT` - Command text (privileged intent)
//! - `GUILD_MEMBERS` - Member cache for permission and hierarchy checks (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice state for mute and deafen
//!
//! Privileged intents must be enabled in the Discord Developer Portal for the bot
//! application.

pub mod gateway;
pub mod handler;
pub mod start;
pub mod status;

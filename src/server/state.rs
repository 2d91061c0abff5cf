//! Application state shared across all request handlers.
//!
//! Initialized once at startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - the gateway, registry and status are reference-counted

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    bot::{gateway::DiscordGateway, status::BotStatus},
    command::registry::CommandRegistry,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Read access to the bot's Discord cache.
    pub gateway: Arc<dyn DiscordGateway>,

    /// Command catalog served by `/api/commands`.
    pub registry: Arc<CommandRegistry>,

    /// Connection status, uptime and latency of the bot.
    pub status: BotStatus,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        gateway: Arc<dyn DiscordGateway>,
        registry: Arc<CommandRegistry>,
        status: BotStatus,
    ) -> Self {
        Self {
            db,
            gateway,
            registry,
            status,
        }
    }
}

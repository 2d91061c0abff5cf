use serenity::all::{Context, EventHandler, Guild, Message, Ready, UnavailableGuild};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::command::{dispatcher::Dispatcher, BotServices};

pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub services: Arc<BotServices>,
    pub dispatcher: Dispatcher,
}

impl Handler {
    pub fn new(services: Arc<BotServices>) -> Self {
        Self {
            dispatcher: Dispatcher::new(services.clone()),
            services,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.services, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.services.db, ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild goes offline
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.services.db, ctx, incomplete, full).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.dispatcher, ctx, message).await;
    }
}

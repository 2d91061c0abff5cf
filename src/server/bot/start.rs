use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::server::{
    bot::handler::Handler, command::BotServices, config::Config, error::AppError,
};

/// Gateway intents the bot subscribes to.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES
}

/// Builds the Discord client without connecting.
///
/// The caller takes the client's HTTP handle, cache and shard manager before
/// starting it in a separate task with [`Client::start`].
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `services` - Shared collaborators handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Configured client
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, services: Arc<BotServices>) -> Result<Client, AppError> {
    let handler = Handler::new(services);

    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

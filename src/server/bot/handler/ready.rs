//! Ready event handler.
//!
//! Fires after each successful gateway handshake. Marks the bot online so the
//! dashboard and stats job see it as ready, and sets the presence.

use serenity::all::{ActivityData, Context, Ready};

use crate::server::{command::BotServices, model::guild::DEFAULT_PREFIX};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `services` - Shared services holding the bot status
/// - `ctx` - Discord context for setting the activity
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(services: &BotServices, ctx: Context, ready: Ready) {
    let tag = ready.user.tag();
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        tag,
        ready.guilds.len()
    );

    services.status.mark_ready(ready.user.id.get(), tag).await;

    ctx.set_activity(Some(ActivityData::listening(format!("{}help", DEFAULT_PREFIX))));
}

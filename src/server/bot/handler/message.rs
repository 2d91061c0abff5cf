//! Message event handler.
//!
//! Converts the serenity message into the gateway-agnostic form and hands it to the
//! command dispatcher together with a gateway bound to this event's HTTP and cache.

use serenity::all::{Context, Message};
use std::sync::Arc;

use crate::server::{
    bot::gateway::serenity_gateway::{incoming_message, SerenityGateway},
    command::dispatcher::{DispatchOutcome, Dispatcher},
};

/// Handles a message created in any channel the bot can see.
///
/// # Arguments
/// - `dispatcher` - Command dispatcher
/// - `ctx` - Discord context providing HTTP and cache access
/// - `message` - The new message
pub async fn handle_message(dispatcher: &Dispatcher, ctx: Context, message: Message) {
    let gateway = Arc::new(SerenityGateway::new(ctx.http.clone(), ctx.cache.clone()));
    let incoming = incoming_message(&message);

    let outcome = dispatcher.handle(gateway, &incoming).await;

    match outcome {
        DispatchOutcome::Ignored(_) => {}
        DispatchOutcome::Denied { command } => tracing::debug!(
            "User {} denied '{}' in guild {:?}",
            incoming.author.id,
            command,
            incoming.guild_id
        ),
        DispatchOutcome::Executed { command } | DispatchOutcome::Failed { command } => {
            tracing::debug!(
                "Dispatched '{}' for message {}: {:?}",
                command,
                incoming.id,
                outcome
            )
        }
    }
}

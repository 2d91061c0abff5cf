//! Guild membership event handlers.
//!
//! `guild_create` fires on startup for every guild the bot is in, when it joins a
//! new guild and when a guild recovers from an outage; each upserts the guild
//! record as active. `guild_delete` marks the record as left unless the guild only
//! became unavailable.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::server::{model::guild::UpsertGuildParams, service::guild::GuildService};

/// Handles the guild_create event.
///
/// An existing prefix is preserved.
///
/// # Arguments
/// - `db` - Database connection for storing the guild record
/// - `_ctx` - Discord context (unused)
/// - `guild` - Guild data from Discord
/// - `is_new` - Whether the bot just joined the guild
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    if is_new == Some(true) {
        tracing::info!("Joined guild: {} ({})", guild.name, guild_id);
    } else {
        tracing::debug!(
            "Guild available: {} ({}) - member_count: {}",
            guild.name,
            guild_id,
            guild.member_count
        );
    }

    let params = UpsertGuildParams {
        guild_id,
        name: guild.name,
    };
    if let Err(e) = GuildService::new(db).record_join(params).await {
        tracing::error!("Failed to upsert guild {}: {}", guild_id, e);
    }
}

/// Handles the guild_delete event.
///
/// # Arguments
/// - `db` - Database connection for updating the guild record
/// - `_ctx` - Discord context (unused)
/// - `incomplete` - Guild id and whether the guild merely became unavailable
/// - `full` - Cached guild data, if any
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    incomplete: UnavailableGuild,
    full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", guild_id);
        return;
    }

    let name = full.map(|g| g.name).unwrap_or_default();
    tracing::info!("Left guild: {} ({})", name, guild_id);

    match GuildService::new(db).record_leave(guild_id).await {
        Ok(true) => {}
        Ok(false) => tracing::debug!("No active record for guild {}", guild_id),
        Err(e) => tracing::error!("Failed to mark guild {} as left: {}", guild_id, e),
    }
}

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        bot::{BotStatsDto, BotStatusDto, StatsSnapshotDto},
        command::CommandDto,
        guild::{GuildDto, GuildPrefixDto, UpdatePrefixDto},
        moderation::ModerationLogDto,
        usage::CommandUsageDto,
    },
    server::{
        controller::{
            command::{self, get_commands, COMMAND_TAG},
            guild::{self, get_guild_prefix, get_guilds, update_guild_prefix, GUILD_TAG},
            moderation::{self, get_moderation_logs, MODERATION_TAG},
            stats::{self, get_stats, get_stats_history, STATS_TAG},
            status::{self, get_status, health, STATUS_TAG},
            usage::{self, get_usage, USAGE_TAG},
        },
        state::AppState,
    },
};

/// OpenAPI document of the dashboard API, served at `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Guildwarden API", description = "Read and configure the Guildwarden Discord bot"),
    paths(
        status::get_status,
        status::health,
        stats::get_stats,
        stats::get_stats_history,
        command::get_commands,
        guild::get_guilds,
        guild::get_guild_prefix,
        guild::update_guild_prefix,
        usage::get_usage,
        moderation::get_moderation_logs,
    ),
    components(schemas(
        BotStatusDto,
        BotStatsDto,
        StatsSnapshotDto,
        CommandDto,
        GuildDto,
        GuildPrefixDto,
        UpdatePrefixDto,
        CommandUsageDto,
        ModerationLogDto,
        HealthDto,
        ErrorDto,
    )),
    tags(
        (name = STATUS_TAG, description = "Bot connection status and liveness"),
        (name = STATS_TAG, description = "Aggregate and historical statistics"),
        (name = COMMAND_TAG, description = "Chat command catalog"),
        (name = GUILD_TAG, description = "Connected guilds and their prefixes"),
        (name = USAGE_TAG, description = "Command usage records"),
        (name = MODERATION_TAG, description = "Moderation audit log"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/health", get(health))
        .route("/api/stats", get(get_stats))
        .route("/api/stats/history", get(get_stats_history))
        .route("/api/commands", get(get_commands))
        .route("/api/guilds", get(get_guilds))
        .route(
            "/api/guilds/{guild_id}/prefix",
            get(get_guild_prefix).put(update_guild_prefix),
        )
        .route("/api/usage", get(get_usage))
        .route("/api/moderation/{guild_id}", get(get_moderation_logs))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

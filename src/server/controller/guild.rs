use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        guild::{GuildDto, GuildPrefixDto, UpdatePrefixDto},
    },
    server::{
        error::AppError,
        model::{guild::DEFAULT_PREFIX, member::GuildOverview},
        service::guild::GuildService,
        state::AppState,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get every guild the bot is connected to.
///
/// Combines live cache data with the prefix stored for each guild. Guilds without a
/// stored record report the default prefix.
///
/// # Returns
/// - `200 OK` - Connected guilds
/// - `503 Service Unavailable` - The bot has not connected to Discord yet
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Connected guilds", body = ApiResponse<Vec<GuildDto>>),
        (status = 503, description = "Bot is not ready", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    if !state.status.snapshot().await.online {
        return Err(AppError::ServiceUnavailable("Bot is not ready".to_string()));
    }

    let prefixes: HashMap<u64, String> = GuildService::new(&state.db)
        .get_active()
        .await?
        .into_iter()
        .map(|record| (record.guild_id, record.effective_prefix().to_string()))
        .collect();

    let guilds: Vec<GuildDto> = state
        .gateway
        .list_guilds()
        .into_iter()
        .map(|overview| {
            let prefix = prefixes
                .get(&overview.guild_id)
                .cloned()
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
            guild_dto(overview, prefix)
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(guilds))))
}

/// Get the command prefix of a guild.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - Stored prefix, or the default when the guild has no record
/// - `400 Bad Request` - Guild ID is not a valid snowflake
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/prefix",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild prefix", body = ApiResponse<GuildPrefixDto>),
        (status = 400, description = "Invalid guild ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_prefix(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let prefix = GuildService::new(&state.db)
        .effective_prefix(Some(guild_id))
        .await?;

    let dto = GuildPrefixDto {
        guild_id: guild_id.to_string(),
        prefix,
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Set the command prefix of a guild.
///
/// Creates the guild record when missing, named after the cached guild if the bot
/// can see it.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
/// - `payload` - New prefix, at most 5 characters after trimming
///
/// # Returns
/// - `200 OK` - The stored prefix
/// - `400 Bad Request` - Prefix is empty or too long
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/prefix",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = UpdatePrefixDto,
    responses(
        (status = 200, description = "Prefix updated", body = ApiResponse<GuildPrefixDto>),
        (status = 400, description = "Invalid prefix", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guild_prefix(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Json(payload): Json<UpdatePrefixDto>,
) -> Result<impl IntoResponse, AppError> {
    let name = state
        .gateway
        .guild_overview(guild_id)
        .map(|g| g.name)
        .unwrap_or_else(|| guild_id.to_string());

    let record = GuildService::new(&state.db)
        .set_prefix(guild_id, name, &payload.prefix)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with_message(
            record.into_prefix_dto(),
            "Prefix updated",
        )),
    ))
}

fn guild_dto(overview: GuildOverview, prefix: String) -> GuildDto {
    GuildDto {
        id: overview.guild_id.to_string(),
        name: overview.name,
        icon_url: overview.icon_url,
        owner_id: overview.owner_id.to_string(),
        member_count: overview.member_count,
        channel_count: overview.channel_count,
        role_count: overview.role_count,
        prefix,
        created_at: overview.created_at,
    }
}

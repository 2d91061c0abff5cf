use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        moderation::ModerationLogDto,
    },
    server::{
        controller::param::LimitParam, error::AppError, service::moderation::ModerationService,
        state::AppState,
    },
};

/// Tag for grouping moderation endpoints in OpenAPI documentation
pub static MODERATION_TAG: &str = "moderation";

const DEFAULT_LOG_LIMIT: u64 = 50;

/// Get recent moderation logs of a guild.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
/// - `params` - `limit` query parameter (default 50)
///
/// # Returns
/// - `200 OK` - Up to `limit` log entries, oldest first
/// - `400 Bad Request` - Guild ID is not a valid snowflake
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/moderation/{guild_id}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        LimitParam
    ),
    responses(
        (status = 200, description = "Recent moderation logs", body = ApiResponse<Vec<ModerationLogDto>>),
        (status = 400, description = "Invalid guild ID", body = ErrorDto),
        (status = 500, description = "Failed to fetch moderation logs", body = ErrorDto)
    ),
)]
pub async fn get_moderation_logs(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let logs = ModerationService::new(&state.db)
        .recent_for_guild(guild_id, params.or(DEFAULT_LOG_LIMIT))
        .await?;

    let dtos: Vec<ModerationLogDto> = logs.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dtos))))
}

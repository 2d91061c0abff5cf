use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        bot::{BotStatsDto, StatsSnapshotDto},
    },
    server::{
        controller::param::LimitParam, error::AppError, model::stats::format_uptime,
        service::stats::StatsService, state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

const DEFAULT_HISTORY_LIMIT: u64 = 100;

/// Get aggregate bot statistics.
///
/// Guild and user counts come from the Discord cache; commands used is the total
/// number of recorded invocations.
///
/// # Returns
/// - `200 OK` - Current statistics
/// - `500 Internal Server Error` - The usage store could not be read
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Current bot statistics", body = ApiResponse<BotStatsDto>),
        (status = 500, description = "Failed to fetch stats", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let live = StatsService::new(&state.db)
        .live(state.gateway.as_ref(), state.status.uptime())
        .await?;

    let stats = BotStatsDto {
        guild_count: live.guild_count,
        user_count: live.user_count,
        commands_used: live.commands_used,
        uptime: format_uptime(live.uptime_secs),
        uptime_secs: live.uptime_secs,
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(stats))))
}

/// Get recent periodic statistics snapshots, oldest first.
///
/// # Arguments
/// - `params` - `limit` query parameter (default 100)
///
/// # Returns
/// - `200 OK` - Up to `limit` most recent snapshots
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/stats/history",
    tag = STATS_TAG,
    params(LimitParam),
    responses(
        (status = 200, description = "Recent snapshots", body = ApiResponse<Vec<StatsSnapshotDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats_history(
    State(state): State<AppState>,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let snapshots = StatsService::new(&state.db)
        .history(params.or(DEFAULT_HISTORY_LIMIT))
        .await?;

    let dtos: Vec<StatsSnapshotDto> = snapshots.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dtos))))
}

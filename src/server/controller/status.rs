use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, HealthDto},
        bot::BotStatusDto,
    },
    server::{error::AppError, state::AppState},
};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Get the bot's connection status.
///
/// Reports whether the gateway session is ready along with the bot account, process
/// uptime, heartbeat latency and cache sizes. Always succeeds; an offline bot is
/// reported with `online: false`.
///
/// # Returns
/// - `200 OK` - Current status
#[utoipa::path(
    get,
    path = "/api/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Current bot status", body = ApiResponse<BotStatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.status.snapshot().await;
    let counts = state.gateway.cache_counts();
    let latency = state.status.latency().await;

    let status = BotStatusDto {
        online: snapshot.online,
        tag: snapshot.tag,
        user_id: snapshot.user_id.map(|id| id.to_string()),
        uptime_secs: state.status.uptime().as_secs(),
        latency_ms: latency.map(|l| l.as_millis() as u64),
        guild_count: counts.guilds,
        user_count: counts.users,
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(status))))
}

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - The HTTP server is running
#[utoipa::path(
    get,
    path = "/api/health",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Server is healthy", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok_with_message(
        HealthDto {
            timestamp: chrono::Utc::now(),
        },
        "Server is healthy",
    ))
}

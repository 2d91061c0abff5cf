use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        usage::CommandUsageDto,
    },
    server::{
        controller::param::LimitParam, error::AppError, service::usage::UsageService,
        state::AppState,
    },
};

/// Tag for grouping usage endpoints in OpenAPI documentation
pub static USAGE_TAG: &str = "usage";

const DEFAULT_USAGE_LIMIT: u64 = 100;

/// Get recent command usage.
///
/// Returns the most recent usage records in insertion order, oldest first.
///
/// # Arguments
/// - `params` - `limit` query parameter (default 100)
///
/// # Returns
/// - `200 OK` - Up to `limit` usage records; empty when nothing was recorded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/usage",
    tag = USAGE_TAG,
    params(LimitParam),
    responses(
        (status = 200, description = "Recent command usage", body = ApiResponse<Vec<CommandUsageDto>>),
        (status = 500, description = "Failed to fetch command usage", body = ErrorDto)
    ),
)]
pub async fn get_usage(
    State(state): State<AppState>,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let usage = UsageService::new(&state.db)
        .recent(params.or(DEFAULT_USAGE_LIMIT))
        .await?;

    let dtos: Vec<CommandUsageDto> = usage.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(dtos))))
}

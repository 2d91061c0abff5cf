use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ApiResponse, command::CommandDto},
    server::state::AppState,
};

/// Tag for grouping command catalog endpoints in OpenAPI documentation
pub static COMMAND_TAG: &str = "command";

/// Get the chat command catalog.
///
/// Lists every registered command grouped by category (basic, moderation, utility)
/// in registration order.
///
/// # Returns
/// - `200 OK` - All command descriptors
#[utoipa::path(
    get,
    path = "/api/commands",
    tag = COMMAND_TAG,
    responses(
        (status = 200, description = "Command catalog", body = ApiResponse<Vec<CommandDto>>)
    ),
)]
pub async fn get_commands(State(state): State<AppState>) -> impl IntoResponse {
    let commands: Vec<CommandDto> = state
        .registry
        .list()
        .into_iter()
        .map(|descriptor| descriptor.into_dto())
        .collect();

    (StatusCode::OK, Json(ApiResponse::ok(commands)))
}

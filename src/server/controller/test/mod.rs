//! Handler tests against an in-memory database and a fake gateway.

use axum::{body::to_bytes, response::IntoResponse};
use serde_json::Value;
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::server::{
    bot::{gateway::fake::FakeGateway, status::BotStatus},
    command::registry::CommandRegistry,
    state::AppState,
};


pub(super) async fn app_state(gateway: FakeGateway) -> (TestContext, AppState) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let state = AppState::new(
        db,
        Arc::new(gateway),
        Arc::new(CommandRegistry::standard()),
        BotStatus::new(),
    );
    (test, state)
}

/// Renders a handler result and decodes the JSON body.
pub(super) async fn body_of(response: impl IntoResponse) -> (u16, Value) {
    let response = response.into_response();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "today": state.clock.today(),
    }))
}

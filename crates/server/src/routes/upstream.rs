use axum::{extract::State, Json};
use common::CoreError;
use serde_json::Value;
use tracing::error;

use crate::{errors::ApiError, state::AppState};

fn relay_error(route: &str, e: CoreError) -> ApiError {
    error!(%route, error = %e, "upstream relay failed");
    ApiError::Upstream(format!("error in {route}"))
}

pub async fn quote(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.upstream.quote().await.map(Json).map_err(|e| relay_error("/quote", e))
}

pub async fn universities(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.upstream.universities().await.map(Json).map_err(|e| relay_error("/univ", e))
}

pub async fn countries(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    state.upstream.countries().await.map(Json).map_err(|e| relay_error("/countries", e))
}

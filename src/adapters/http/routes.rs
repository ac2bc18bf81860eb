use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::{error::ApiError, state::AppState};
use crate::domain::votes::candidate_vote::VoteSnapshot;

pub async fn votes_handler(State(state): State<AppState>) -> Result<Json<VoteSnapshot>, ApiError> {
    let snapshot = state.snapshot_reader.read_snapshot().await?;
    Ok(Json(snapshot))
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

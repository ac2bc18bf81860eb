use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use error_stack::Report;
use serde::Serialize;

use crate::application::vote_snapshot::VoteSnapshotError;

#[derive(Debug)]
pub struct ApiError(pub Report<VoteSnapshotError>);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub status_message: String,
}

impl From<Report<VoteSnapshotError>> for ApiError {
    fn from(report: Report<VoteSnapshotError>) -> Self {
        ApiError(report)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0.current_context();
        let status =
            StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ErrorBody {
            status_code: status.as_u16(),
            status_message: error.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

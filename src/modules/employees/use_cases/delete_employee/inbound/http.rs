use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::employees::core::employee_id::EmployeeId;
use crate::shell::state::AppState;

pub const DELETED_MESSAGE: &str = "record deleted";

pub async fn handle(State(state): State<AppState>, Path(raw_id): Path<String>) -> impl IntoResponse {
    let id = match EmployeeId::parse(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            tracing::debug!(error = %err, "rejected employee id");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.store.delete(&id).await {
        Ok(0) => StatusCode::NOT_FOUND.into_response(),
        Ok(_) => (StatusCode::OK, Json(DELETED_MESSAGE)).into_response(),
        Err(err) => {
            tracing::error!(%id, error = %err, "failed to delete employee");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::employees::adapters::outbound::employee_store::StoreError;
use crate::modules::employees::core::employee::{Employee, EmployeeFields};
use crate::modules::employees::core::employee_id::EmployeeId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> impl IntoResponse {
    let id = match EmployeeId::parse(&raw_id) {
        Ok(id) => id,
        Err(err) => {
            tracing::debug!(error = %err, "rejected employee id");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let fields = match EmployeeFields::decode(&body) {
        Ok(fields) => fields,
        Err(err) => {
            tracing::debug!(error = %err, "rejected employee body");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    match state.store.update(&id, &fields).await {
        // Built from the request, not read back.
        Ok(()) => (StatusCode::OK, Json(Employee::new(id, fields))).into_response(),
        // Unknown ids answer 400 here, unlike delete; existing clients rely on it.
        Err(StoreError::NotFound) => StatusCode::BAD_REQUEST.into_response(),
        Err(err) => {
            tracing::error!(%id, error = %err, "failed to update employee");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::employees::core::employee::{Employee, EmployeeFields};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let fields = match EmployeeFields::decode(&body) {
        Ok(fields) => fields,
        Err(err) => {
            tracing::debug!(error = %err, "rejected employee body");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let id = match state.store.insert(fields.clone()).await {
        Ok(id) => id,
        Err(err) => {
            tracing::error!(error = %err, "failed to insert employee");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    // Answer with what the store holds now, not with the decoded body.
    let created = match state.store.find(&id).await {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            tracing::warn!(%id, "inserted employee not found on read back");
            Employee::new(id, fields)
        }
        Err(err) => {
            tracing::error!(%id, error = %err, "failed to read back inserted employee");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    (StatusCode::CREATED, Json(created)).into_response()
}

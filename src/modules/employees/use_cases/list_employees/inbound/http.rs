use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list().await {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list employees");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

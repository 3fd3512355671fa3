use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::store::RegistrationStore;
use crate::AppState;

pub async fn list_registrations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.list_all().await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch registrations: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch registrations" })),
            )
                .into_response()
        }
    }
}

pub async fn delete_registration(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> impl IntoResponse {
    match state.store.delete(account_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({ "message": "Deleted user from database!" })),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "This user does not exist in the database!" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete registration {}: {:?}", account_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to delete registration" })),
            )
                .into_response()
        }
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failure categories reported by the whitelist API collaborator. The
/// display strings are exactly what the end user sees; detail stays in
/// the logs.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Bad client request.")]
    Client,
    #[error("Remote server error.")]
    Server,
    #[error("Unable to connect to the whitelist API.")]
    Connectivity,
}

/// Everything a single command invocation can fail with. Every variant is
/// resolved at the command boundary; nothing propagates past one invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("Requested action '{0}' is not one of: add, list, off, on, reload, remove")]
    UnknownAction(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Internal error.")]
    Store(#[from] anyhow::Error),
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let status = match &self {
            CommandError::Validation(_) | CommandError::UnknownAction(_) => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Conflict(_) => StatusCode::CONFLICT,
            CommandError::Transport(_) => StatusCode::BAD_GATEWAY,
            CommandError::Store(e) => {
                tracing::error!("Database error while handling command: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(json!({ "error": self.to_string(), "ephemeral": true })),
        )
            .into_response()
    }
}

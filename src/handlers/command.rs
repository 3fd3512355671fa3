use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::CommandError;
use crate::models::command::{CommandReply, WhitelistCommand};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/commands/whitelist",
    request_body = WhitelistCommand,
    responses(
        (status = 200, description = "Command handled, reply to show the user", body = CommandReply),
        (status = 400, description = "Missing, ambiguous or malformed identity, or unknown action"),
        (status = 409, description = "Supplied identity contradicts the stored registration"),
        (status = 502, description = "Whitelist API rejected the request or was unreachable")
    )
)]
pub async fn whitelist_command(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WhitelistCommand>,
) -> Result<Json<CommandReply>, CommandError> {
    let reply = state.engine.handle(&payload).await?;
    Ok(Json(reply))
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound command fields, already extracted by the chat transport.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WhitelistCommand {
    pub account_id: i64,
    pub action: String,
    pub name: Option<String>,
    pub uuid: Option<String>,
}

/// What the transport should show the user. `ephemeral` asks for a reply
/// visible only to the requesting user.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommandReply {
    pub message: String,
    pub ephemeral: bool,
}

impl CommandReply {
    pub fn ephemeral(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ephemeral: true,
        }
    }
}

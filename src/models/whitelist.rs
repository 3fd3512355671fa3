use crate::error::CommandError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WhitelistAction {
    Add,
    List,
    Off,
    On,
    Reload,
    Remove,
}

impl WhitelistAction {
    /// Action names arrive lowercase from slash-command options but are
    /// accepted in any casing.
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        match raw.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "list" => Ok(Self::List),
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            "reload" => Ok(Self::Reload),
            "remove" => Ok(Self::Remove),
            _ => Err(CommandError::UnknownAction(raw.to_string())),
        }
    }
}

/// Body of the outbound call to the whitelist service. Ephemeral, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhitelistRequest {
    pub action: WhitelistAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
}

impl WhitelistRequest {
    pub fn new(action: WhitelistAction) -> Self {
        Self {
            action,
            argument: None,
        }
    }

    pub fn with_argument(action: WhitelistAction, argument: String) -> Self {
        Self {
            action,
            argument: Some(argument),
        }
    }
}

/// Reply from the whitelist service; extra fields in the body are ignored.
#[derive(Debug, Deserialize)]
pub struct WhitelistResponse {
    #[serde(rename = "userMessage")]
    pub user_message: String,
}

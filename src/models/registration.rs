use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored association between a chat account and a game identity.
/// The command path never sets both `username` and `uuid`; a row with
/// neither set is tolerated and treated as unregistered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub account_id: i64,
    pub username: Option<String>,
    pub uuid: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Registration {
    pub fn new(account_id: i64, identity: &Identity) -> Self {
        let (username, uuid) = match identity {
            Identity::Username(name) => (Some(name.clone()), None),
            Identity::Uuid(id) => (None, Some(*id)),
        };
        Self {
            account_id,
            username,
            uuid,
            created_at: None,
        }
    }
}

/// A validated game identity. Exactly one kind, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Username(String),
    Uuid(Uuid),
}

impl Identity {
    /// The string sent as the whitelist request argument.
    pub fn argument(&self) -> String {
        match self {
            Identity::Username(name) => name.clone(),
            Identity::Uuid(id) => id.to_string(),
        }
    }
}

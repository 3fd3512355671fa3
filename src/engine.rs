use crate::error::CommandError;
use crate::models::command::{CommandReply, WhitelistCommand};
use crate::models::registration::{Identity, Registration};
use crate::models::whitelist::{WhitelistAction, WhitelistRequest};
use crate::services::whitelist_api::WhitelistApi;
use crate::store::RegistrationStore;
use regex::Regex;
use std::sync::Arc;
use uuid::Uuid;

const MISSING_IDENTITY: &str = "Argument 'name' or 'uuid' must be supplied.";
const AMBIGUOUS_IDENTITY: &str = "Only supply either name OR uuid.";
const MALFORMED_UUID: &str =
    "UUID in unexpected format. Format: 00000000-0000-0000-0000-000000000000";
const USE_UUID_INSTEAD: &str = "You registered with your game UUID, use that instead.";
const USE_USERNAME_INSTEAD: &str = "You registered with your game username, use that instead.";
const UUID_MISMATCH: &str =
    "Given UUID does not match registered UUID. Ask an admin for assistance.";
const USERNAME_MISMATCH: &str =
    "Given username does not match registered username. Ask an admin for assistance.";

/// Game usernames are alphanumeric plus underscore; anything else is
/// dropped before storage or comparison.
fn sanitize_username(raw: &str) -> String {
    Regex::new(r"[^A-Za-z0-9_]")
        .unwrap()
        .replace_all(raw, "")
        .into_owned()
}

/// Turns the optional name/uuid pair into exactly one validated identity.
/// Runs before any store lookup. The checks keep a fixed order so the error
/// reported is stable when several problems are present at once: missing,
/// then malformed uuid, then ambiguous.
pub fn validate_identity(
    name: Option<&str>,
    uuid: Option<&str>,
) -> Result<Identity, CommandError> {
    if name.is_none() && uuid.is_none() {
        return Err(CommandError::Validation(MISSING_IDENTITY));
    }

    let name = name.map(sanitize_username);
    let uuid = match uuid {
        Some(raw) => Some(
            Uuid::parse_str(raw).map_err(|_| CommandError::Validation(MALFORMED_UUID))?,
        ),
        None => None,
    };

    match (name, uuid) {
        (Some(_), Some(_)) => Err(CommandError::Validation(AMBIGUOUS_IDENTITY)),
        (Some(name), None) => Ok(Identity::Username(name)),
        (None, Some(uuid)) => Ok(Identity::Uuid(uuid)),
        (None, None) => Err(CommandError::Validation(MISSING_IDENTITY)),
    }
}

/// What the engine decided to do for one validated ADD.
#[derive(Debug, PartialEq)]
pub enum Decision {
    /// First-time registration: persist the row, then forward ADD.
    Register(Registration),
    /// Already registered with a matching identity: forward ADD only. The
    /// argument carries the stored form, so a username keeps its stored
    /// casing.
    Forward(String),
    /// Registered with the other identity kind; tell the user which to use.
    UseStored(&'static str),
    /// Supplied identity contradicts the stored one.
    Mismatch(&'static str),
}

/// The reconciliation decision table. Pure: no store access, no I/O. The
/// supplied identity is only ever compared against the stored identity of
/// the same kind; a kind mismatch always yields `UseStored`, never a
/// re-registration. A row that somehow carries both fields is treated as a
/// UUID registration, and a row with neither field behaves like no row at
/// all.
pub fn reconcile(
    account_id: i64,
    supplied: &Identity,
    existing: Option<&Registration>,
) -> Decision {
    if let Some(existing) = existing {
        if let Some(stored) = existing.uuid {
            return match supplied {
                Identity::Uuid(given) if *given == stored => Decision::Forward(stored.to_string()),
                Identity::Uuid(_) => Decision::Mismatch(UUID_MISMATCH),
                Identity::Username(_) => Decision::UseStored(USE_UUID_INSTEAD),
            };
        }
        if let Some(stored) = existing.username.as_deref() {
            return match supplied {
                Identity::Username(given) if given.eq_ignore_ascii_case(stored) => {
                    Decision::Forward(stored.to_string())
                }
                Identity::Username(_) => Decision::Mismatch(USERNAME_MISMATCH),
                Identity::Uuid(_) => Decision::UseStored(USE_USERNAME_INSTEAD),
            };
        }
        // Row exists but resolves to no identity: fall through and register
        // as if the account were new.
    }
    Decision::Register(Registration::new(account_id, supplied))
}

/// Drives one command to a terminal outcome: validate, consult the store,
/// decide, optionally persist, optionally forward one request. Holds no
/// state of its own between invocations.
pub struct ReconciliationEngine<S, A> {
    store: Arc<S>,
    api: Arc<A>,
}

impl<S: RegistrationStore, A: WhitelistApi> ReconciliationEngine<S, A> {
    pub fn new(store: Arc<S>, api: Arc<A>) -> Self {
        Self { store, api }
    }

    pub async fn handle(&self, command: &WhitelistCommand) -> Result<CommandReply, CommandError> {
        let action = WhitelistAction::parse(&command.action)?;
        match action {
            WhitelistAction::Add => self.add(command).await,
            WhitelistAction::Remove => {
                let identity =
                    validate_identity(command.name.as_deref(), command.uuid.as_deref())?;
                // REMOVE never touches the store; the registration stays
                // bound to the account.
                self.forward(WhitelistRequest::with_argument(action, identity.argument()))
                    .await
            }
            _ => self.forward(WhitelistRequest::new(action)).await,
        }
    }

    async fn add(&self, command: &WhitelistCommand) -> Result<CommandReply, CommandError> {
        let identity = validate_identity(command.name.as_deref(), command.uuid.as_deref())?;
        let existing = self.store.get(command.account_id).await?;

        match reconcile(command.account_id, &identity, existing.as_ref()) {
            Decision::Register(registration) => {
                // Persist first, then the single outbound call. A transport
                // failure here leaves the registration in place; the remote
                // list catches up on the next ADD.
                self.store.put(&registration).await?;
                self.forward(WhitelistRequest::with_argument(
                    WhitelistAction::Add,
                    identity.argument(),
                ))
                .await
            }
            Decision::Forward(argument) => {
                self.forward(WhitelistRequest::with_argument(WhitelistAction::Add, argument))
                    .await
            }
            Decision::UseStored(message) => Ok(CommandReply::ephemeral(message)),
            Decision::Mismatch(message) => Err(CommandError::Conflict(message)),
        }
    }

    async fn forward(&self, request: WhitelistRequest) -> Result<CommandReply, CommandError> {
        let response = self.api.send(&request).await?;
        Ok(CommandReply::ephemeral(response.user_message))
    }
}

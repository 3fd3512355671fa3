use super::RegistrationStore;
use crate::models::registration::Registration;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

// UUIDs are kept as CHAR(36) text so rows stay readable in the database;
// they are parsed back before any comparison happens.
#[derive(Debug, FromRow)]
struct RegistrationRow {
    account_id: i64,
    username: Option<String>,
    uuid: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl RegistrationRow {
    fn into_registration(self) -> anyhow::Result<Registration> {
        let uuid = match self.uuid {
            Some(raw) => Some(Uuid::parse_str(&raw)?),
            None => None,
        };
        Ok(Registration {
            account_id: self.account_id,
            username: self.username,
            uuid,
            created_at: self.created_at,
        })
    }
}

#[derive(Clone)]
pub struct MySqlRegistrationStore {
    pool: MySqlPool,
}

impl MySqlRegistrationStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for MySqlRegistrationStore {
    async fn get(&self, account_id: i64) -> anyhow::Result<Option<Registration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            "SELECT account_id, username, uuid, created_at FROM registrations WHERE account_id = ?",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(RegistrationRow::into_registration).transpose()
    }

    async fn put(&self, registration: &Registration) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO registrations (account_id, username, uuid) VALUES (?, ?, ?) \
             ON DUPLICATE KEY UPDATE username = VALUES(username), uuid = VALUES(uuid)",
        )
        .bind(registration.account_id)
        .bind(&registration.username)
        .bind(registration.uuid.map(|u| u.to_string()))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, account_id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM registrations WHERE account_id = ?")
            .bind(account_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Registration>> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            "SELECT account_id, username, uuid, created_at FROM registrations",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(RegistrationRow::into_registration)
            .collect()
    }
}

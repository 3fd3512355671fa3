use super::RegistrationStore;
use crate::models::registration::Registration;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// HashMap-backed store for the engine test bench and local experiments.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<i64, Registration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn get(&self, account_id: i64) -> anyhow::Result<Option<Registration>> {
        Ok(self.rows.lock().unwrap().get(&account_id).cloned())
    }

    async fn put(&self, registration: &Registration) -> anyhow::Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(registration.account_id, registration.clone());
        Ok(())
    }

    async fn delete(&self, account_id: i64) -> anyhow::Result<bool> {
        Ok(self.rows.lock().unwrap().remove(&account_id).is_some())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Registration>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }
}

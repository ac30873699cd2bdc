//! In-process local storage for tests and throwaway servers.

use async_trait::async_trait;
use kku_core::{error::GatewayError, traits::LocalStorage};
use std::collections::HashMap;
use std::sync::Mutex;

/// Volatile per-client slots; everything is lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<(String, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<(String, String), String>>, GatewayError> {
        self.slots
            .lock()
            .map_err(|e| GatewayError::Storage(format!("memory store poisoned: {e}")))
    }
}

#[async_trait]
impl LocalStorage for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_item(&self, client: &str, key: &str) -> Result<Option<String>, GatewayError> {
        let slots = self.lock()?;
        Ok(slots.get(&(client.to_string(), key.to_string())).cloned())
    }

    async fn set_item(&self, client: &str, key: &str, value: &str) -> Result<(), GatewayError> {
        let mut slots = self.lock()?;
        slots.insert((client.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, client: &str, key: &str) -> Result<bool, GatewayError> {
        let mut slots = self.lock()?;
        Ok(slots.remove(&(client.to_string(), key.to_string())).is_some())
    }
}

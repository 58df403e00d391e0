use super::{GatewayResult, Payload, ReminderGateway, MEMORY_SCHEME};
use crate::error::BackendError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredReminder {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Seconds until the reminder fires
    pub duration: u64,
}

/// In-memory reminder backend.
/// Does NOT persist data; ids are assigned sequentially from 1.
#[derive(Debug)]
pub struct InMemoryGateway {
    address: String,
    reminders: BTreeMap<u64, StoredReminder>,
    next_id: u64,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::with_address(MEMORY_SCHEME)
    }
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            reminders: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StoredReminder> {
        parse_id(id).and_then(|key| self.reminders.get(&key))
    }

    fn key_for(&self, id: &str) -> GatewayResult<u64> {
        parse_id(id)
            .filter(|key| self.reminders.contains_key(key))
            .ok_or_else(|| BackendError::NotFound(id.to_string()))
    }
}

fn parse_id(id: &str) -> Option<u64> {
    id.trim().parse().ok()
}

fn to_payload<T: Serialize + ?Sized>(value: &T) -> GatewayResult<Payload> {
    serde_json::to_string_pretty(value).map_err(|e| BackendError::Other(e.to_string()))
}

impl ReminderGateway for InMemoryGateway {
    fn create(
        &mut self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        let key = self.next_id;
        self.next_id += 1;
        let reminder = StoredReminder {
            id: key.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            duration: duration.as_secs(),
        };
        let payload = to_payload(&reminder)?;
        self.reminders.insert(key, reminder);
        Ok(payload)
    }

    fn edit(
        &mut self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> GatewayResult<Payload> {
        let key = self.key_for(id)?;
        let reminder = self
            .reminders
            .get_mut(&key)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
        reminder.title = title.to_string();
        reminder.message = message.to_string();
        reminder.duration = duration.as_secs();
        to_payload(&*reminder)
    }

    fn fetch(&mut self, ids: &[String]) -> GatewayResult<Payload> {
        if ids.is_empty() {
            let all: Vec<&StoredReminder> = self.reminders.values().collect();
            return to_payload(&all);
        }

        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            let key = self.key_for(id)?;
            found.extend(self.reminders.get(&key));
        }
        to_payload(&found)
    }

    fn delete(&mut self, ids: &[String]) -> GatewayResult<()> {
        // Resolve everything first so a bad id leaves the store untouched.
        let keys = ids
            .iter()
            .map(|id| self.key_for(id))
            .collect::<GatewayResult<Vec<u64>>>()?;
        for key in keys {
            self.reminders.remove(&key);
        }
        Ok(())
    }

    fn health_check(&mut self, _host: &str) -> bool {
        true
    }

    fn address(&self) -> &str {
        &self.address
    }
}

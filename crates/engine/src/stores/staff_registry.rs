//! In-memory staff registry.
//!
//! The whole mapping sits behind one `RwLock`: reads share the guard, every
//! mutation takes it exclusively, so existence checks and writes are never
//! split across two lock acquisitions.

use std::collections::HashMap;

use async_trait::async_trait;
use staffreg_domain::{StaffId, StaffRecord};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{RepoError, StaffRepo};

const ENTITY: &str = "Staff";

/// Staff records keyed by id, iterated in insertion order.
pub struct InMemoryStaffRegistry {
    inner: RwLock<Entries>,
}

#[derive(Default)]
struct Entries {
    records: HashMap<StaffId, StaffRecord>,
    order: Vec<StaffId>,
}

impl InMemoryStaffRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Entries::default()),
        }
    }

    /// Build a registry pre-populated with `records`.
    ///
    /// A later record with a repeated id replaces the earlier one in place.
    pub fn with_records(records: impl IntoIterator<Item = StaffRecord>) -> Self {
        let mut entries = Entries::default();
        for record in records {
            let id = record.id().clone();
            if entries.records.insert(id.clone(), record).is_none() {
                entries.order.push(id);
            }
        }
        Self {
            inner: RwLock::new(entries),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

impl Default for InMemoryStaffRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StaffRepo for InMemoryStaffRegistry {
    async fn list_all(&self) -> Result<Vec<StaffRecord>, RepoError> {
        let guard = self.inner.read().await;
        Ok(guard
            .order
            .iter()
            .filter_map(|id| guard.records.get(id).cloned())
            .collect())
    }

    async fn get(&self, id: &StaffId) -> Result<Option<StaffRecord>, RepoError> {
        Ok(self.inner.read().await.records.get(id).cloned())
    }

    async fn insert(&self, record: StaffRecord) -> Result<(), RepoError> {
        let mut guard = self.inner.write().await;
        if guard.records.contains_key(record.id()) {
            return Err(RepoError::constraint(format!(
                "duplicate staff id: {}",
                record.id()
            )));
        }
        let id = record.id().clone();
        guard.records.insert(id.clone(), record);
        guard.order.push(id);
        Ok(())
    }

    async fn replace(&self, record: StaffRecord) -> Result<(), RepoError> {
        let mut guard = self.inner.write().await;
        match guard.records.get_mut(record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepoError::not_found(ENTITY, record.id())),
        }
    }

    async fn delete(&self, id: &StaffId) -> Result<(), RepoError> {
        let mut guard = self.inner.write().await;
        if guard.records.remove(id).is_none() {
            return Err(RepoError::not_found(ENTITY, id));
        }
        guard.order.retain(|existing| existing != id);
        Ok(())
    }
}

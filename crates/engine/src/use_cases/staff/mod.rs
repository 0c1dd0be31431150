//! Staff CRUD use cases.
//!
//! Keeps HTTP handlers thin: id generation, id forcing on update, and the
//! mapping from repository misses to `StaffError::NotFound` all live here.

use std::sync::Arc;

use staffreg_domain::{StaffDraft, StaffId, StaffRecord};

use crate::infrastructure::ports::{RepoError, StaffRepo};

/// Error type for staff use cases.
#[derive(Debug, thiserror::Error)]
pub enum StaffError {
    #[error("Staff not found: {0}")]
    NotFound(StaffId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Create/read/update/delete over the staff registry.
pub struct StaffCrud {
    staff: Arc<dyn StaffRepo>,
}

impl StaffCrud {
    pub fn new(staff: Arc<dyn StaffRepo>) -> Self {
        Self { staff }
    }

    pub async fn list(&self) -> Result<Vec<StaffRecord>, StaffError> {
        Ok(self.staff.list_all().await?)
    }

    pub async fn get(&self, id: &StaffId) -> Result<StaffRecord, StaffError> {
        self.staff.get(id).await?.ok_or_else(|| {
            tracing::debug!(staff_id = %id, "Staff lookup missed");
            StaffError::NotFound(id.clone())
        })
    }

    /// Store `draft` under a freshly generated id.
    pub async fn create(&self, draft: StaffDraft) -> Result<StaffRecord, StaffError> {
        let record = StaffRecord::from_draft(StaffId::generate(), draft);
        self.staff.insert(record.clone()).await?;
        tracing::info!(staff_id = %record.id(), "Created staff record");
        Ok(record)
    }

    /// Replace the record at `id` wholesale. Fields missing from `draft` are dropped.
    pub async fn update(&self, id: StaffId, draft: StaffDraft) -> Result<StaffRecord, StaffError> {
        let record = StaffRecord::from_draft(id, draft);
        self.staff
            .replace(record.clone())
            .await
            .map_err(|e| not_found_or_repo(e, record.id()))?;
        tracing::info!(staff_id = %record.id(), "Replaced staff record");
        Ok(record)
    }

    pub async fn delete(&self, id: &StaffId) -> Result<(), StaffError> {
        self.staff
            .delete(id)
            .await
            .map_err(|e| not_found_or_repo(e, id))?;
        tracing::info!(staff_id = %id, "Deleted staff record");
        Ok(())
    }
}

fn not_found_or_repo(err: RepoError, id: &StaffId) -> StaffError {
    if err.is_not_found() {
        StaffError::NotFound(id.clone())
    } else {
        StaffError::Repo(err)
    }
}

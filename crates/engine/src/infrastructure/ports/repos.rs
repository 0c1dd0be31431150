//! Repository port traits for registry access.

use async_trait::async_trait;
use staffreg_domain::{StaffId, StaffRecord};

use super::error::RepoError;

// =============================================================================
// Staff Registry
// =============================================================================

/// Keyed storage for staff records.
///
/// Each method is a single atomic step: implementations must not let another
/// caller observe or interleave with a half-finished check-then-write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StaffRepo: Send + Sync {
    /// All records, in insertion order.
    async fn list_all(&self) -> Result<Vec<StaffRecord>, RepoError>;

    async fn get(&self, id: &StaffId) -> Result<Option<StaffRecord>, RepoError>;

    /// Add a new record. Fails with `ConstraintViolation` if the id is taken.
    async fn insert(&self, record: StaffRecord) -> Result<(), RepoError>;

    /// Overwrite an existing record. Fails with `NotFound` if the id is absent.
    async fn replace(&self, record: StaffRecord) -> Result<(), RepoError>;

    /// Fails with `NotFound` if the id is absent.
    async fn delete(&self, id: &StaffId) -> Result<(), RepoError>;
}

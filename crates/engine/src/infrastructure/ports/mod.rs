//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Use cases depend on the
//! traits; `stores` provides the in-memory implementation.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::StaffRepo;

#[cfg(test)]
pub use repos::MockStaffRepo;

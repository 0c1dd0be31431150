//! In-memory state storage modules.
//!
//! Stores manage runtime state that lives only for the life of the process:
//! - `InMemoryStaffRegistry` - the staff registry behind `StaffRepo`

pub mod staff_registry;

pub use staff_registry::InMemoryStaffRegistry;

//! Staff Registry domain types.
//!
//! - `ids` - `StaffId`, the registry key
//! - `entities` - `StaffRecord`, `StaffDraft`, and the example seed roster

pub mod entities;
pub mod ids;

pub use entities::{example_staff, StaffDraft, StaffRecord};
pub use ids::StaffId;

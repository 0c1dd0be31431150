//! Domain entities

mod staff;

pub use staff::{example_staff, StaffDraft, StaffRecord};

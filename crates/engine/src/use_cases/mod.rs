//! Use cases - user story orchestration over the registry ports.

pub mod staff;

pub use staff::{StaffCrud, StaffError};

//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::StaffRepo;
use crate::use_cases;

/// Main application state.
///
/// Owns the use cases built on the registry.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub staff: use_cases::StaffCrud,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(staff_repo: Arc<dyn StaffRepo>) -> Self {
        Self {
            use_cases: UseCases {
                staff: use_cases::StaffCrud::new(staff_repo),
            },
        }
    }
}

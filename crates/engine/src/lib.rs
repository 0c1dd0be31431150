//! Staff Registry Engine library.
//!
//! This crate contains all server-side code for the staff registry service.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port traits and configuration
//! - `stores/` - In-memory registry implementing the ports
//! - `use_cases/` - Staff CRUD orchestration over the ports
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `server` - Process bootstrap and graceful shutdown

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod server;
pub mod stores;
pub mod use_cases;

pub use app::App;

//! Infrastructure implementations.
//!
//! Contains port traits and process-level configuration.

pub mod config;
pub mod ports;

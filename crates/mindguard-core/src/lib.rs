//! mindguard-core
//!
//! Pure domain types for the Mind-Guard assessment engine. No scoring logic
//! and no model dependency. This is the shared vocabulary passed between
//! the scoring, prediction and reporting crates.

pub mod error;
pub mod models;

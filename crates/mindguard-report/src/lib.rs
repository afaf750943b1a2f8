//! mindguard-report
//!
//! Combined-summary rendering for an assessment outcome, via Tera templates.

pub mod error;
pub mod render;
pub mod view;

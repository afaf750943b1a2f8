//! mindguard library root.
//!
//! Wires the scoring, prediction and report crates into one assessment
//! pipeline. Exposed as a library so integration tests can drive the engine
//! without going through the command line.

pub mod config;
pub mod engine;
pub mod error;
pub mod run;
pub mod telemetry;

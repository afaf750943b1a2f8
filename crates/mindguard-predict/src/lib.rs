//! mindguard-predict
//!
//! Risk classification behind an injected [`classifier::Classifier`]
//! capability, the JSON model artifact that implements it, and the
//! recommendation bundles keyed by predicted risk.

pub mod classifier;
pub mod error;
pub mod model;
pub mod predictor;
pub mod recommendations;

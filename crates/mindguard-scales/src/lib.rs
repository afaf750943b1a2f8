//! mindguard-scales
//!
//! Questionnaire definitions and the deterministic scoring engine. Pure
//! data and pure functions with no model dependency. Defines the items, answer
//! options and reverse-scored items of each supported scale, plus severity
//! banding and the questionnaire-only risk fusion.

pub mod error;
pub mod fusion;
pub mod scales;
pub mod scoring;
pub mod severity;

use mindguard_core::models::scale::{ScaleId, ScaleResult};
use mindguard_core::models::severity::SeverityBand;

use error::ScaleError;
use scoring::{ScaleDefinition, ValidationError};
use severity::SeverityTable;

/// Trait implemented by each questionnaire.
pub trait Scale: Send + Sync {
    fn id(&self) -> ScaleId;

    /// Human-readable name (e.g., "PHQ-9 (Depression)").
    fn name(&self) -> &str;

    /// Items, answer options, reverse-scored items and score range.
    fn definition(&self) -> &ScaleDefinition;

    /// Severity cutoffs, if the scale has any.
    fn severity_table(&self) -> Option<&SeverityTable> {
        None
    }

    /// Check a response set against this scale without scoring it.
    fn validate_responses(&self, responses: &[String]) -> Vec<ValidationError> {
        scoring::validate_responses(self.definition(), responses)
    }

    /// Score one response set. See [`scoring::score_responses`].
    fn score(&self, responses: &[String]) -> Result<ScaleResult, ScaleError> {
        scoring::score_responses(self.definition(), responses)
    }

    /// Map a total to this scale's severity band.
    fn severity(&self, total: u32) -> Result<SeverityBand, ScaleError> {
        let table = self
            .severity_table()
            .ok_or(ScaleError::NoSeverityBands(self.id()))?;
        let max = self.definition().max_score;
        if total > max {
            return Err(ScaleError::ScoreOutOfRange {
                scale_id: self.id(),
                total,
                min: 0,
                max,
            });
        }
        Ok(table.band_for(total))
    }
}

/// Return all registered scales, in submission order.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    ScaleId::ALL.into_iter().map(scale_for).collect()
}

/// The scale registered for `id`.
pub fn scale_for(id: ScaleId) -> Box<dyn Scale> {
    match id {
        ScaleId::Phq9 => Box::new(scales::phq9::Phq9),
        ScaleId::Gad7 => Box::new(scales::gad7::Gad7),
        ScaleId::Pss10 => Box::new(scales::pss10::Pss10),
        ScaleId::Mspss => Box::new(scales::mspss::Mspss),
    }
}

/// Look up a scale by its string id (e.g. "pss10").
pub fn get_scale(id: &str) -> Result<Box<dyn Scale>, ScaleError> {
    let id: ScaleId = id
        .parse()
        .map_err(|_| ScaleError::UnknownScale(id.to_string()))?;
    Ok(scale_for(id))
}

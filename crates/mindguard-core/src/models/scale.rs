use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The four questionnaires collected by Mind-Guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ScaleId {
    /// Patient Health Questionnaire (depression).
    Phq9,
    /// Generalized Anxiety Disorder scale (anxiety).
    Gad7,
    /// Perceived Stress Scale (stress).
    Pss10,
    /// Multidimensional Scale of Perceived Social Support.
    Mspss,
}

impl ScaleId {
    pub const ALL: [ScaleId; 4] = [ScaleId::Phq9, ScaleId::Gad7, ScaleId::Pss10, ScaleId::Mspss];

    /// Machine identifier, as used in submissions (e.g. "phq9").
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleId::Phq9 => "phq9",
            ScaleId::Gad7 => "gad7",
            ScaleId::Pss10 => "pss10",
            ScaleId::Mspss => "mspss",
        }
    }

    /// Human-readable name (e.g. "PHQ-9").
    pub fn display_name(&self) -> &'static str {
        match self {
            ScaleId::Phq9 => "PHQ-9",
            ScaleId::Gad7 => "GAD-7",
            ScaleId::Pss10 => "PSS-10",
            ScaleId::Mspss => "MSPSS",
        }
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ScaleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownScaleId(s.to_string()))
    }
}

/// The scored form of one questionnaire.
///
/// `total` is always the sum of `per_item_scores`, and both per-item vectors
/// have one entry per item of the scale, in item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleResult {
    pub scale_id: ScaleId,
    pub total: u32,
    pub per_item_scores: Vec<u32>,
    pub per_item_choices: Vec<String>,
}

impl ScaleResult {
    /// Mean item score. Zero for an empty result.
    pub fn average(&self) -> f64 {
        if self.per_item_scores.is_empty() {
            return 0.0;
        }
        f64::from(self.total) / self.per_item_scores.len() as f64
    }

    pub fn item_count(&self) -> usize {
        self.per_item_scores.len()
    }
}

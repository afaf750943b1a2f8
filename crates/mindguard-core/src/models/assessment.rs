use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::demographics::Demographics;
use super::prediction::PredictionOutcome;
use super::recommendation::Recommendation;
use super::risk::OverallRisk;
use super::scale::{ScaleId, ScaleResult};
use super::severity::SeverityBand;

/// Chosen option labels for every questionnaire, one label per item in
/// item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleResponses {
    pub phq9: Vec<String>,
    pub gad7: Vec<String>,
    pub pss10: Vec<String>,
    pub mspss: Vec<String>,
}

impl ScaleResponses {
    pub fn for_scale(&self, id: ScaleId) -> &[String] {
        match id {
            ScaleId::Phq9 => &self.phq9,
            ScaleId::Gad7 => &self.gad7,
            ScaleId::Pss10 => &self.pss10,
            ScaleId::Mspss => &self.mspss,
        }
    }
}

/// One complete form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub demographics: Demographics,
    pub responses: ScaleResponses,
}

impl Submission {
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// A scored scale together with its display-ready derivations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleSummary {
    pub result: ScaleResult,
    pub max_score: u32,
    /// `None` for scales without severity bands (MSPSS).
    pub severity: Option<SeverityBand>,
    /// Mean item score, reported for MSPSS only.
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentOutcome {
    pub assessed_at: jiff::Timestamp,
    pub scales: Vec<ScaleSummary>,
    pub questionnaire_risk: OverallRisk,
    /// PHQ-9 item 9 (thoughts of self-harm) was answered above "Not at all".
    pub self_harm_alert: bool,
    pub prediction: PredictionOutcome,
    pub recommendation: Option<Recommendation>,
}

impl AssessmentOutcome {
    pub fn scale(&self, id: ScaleId) -> Option<&ScaleSummary> {
        self.scales.iter().find(|s| s.result.scale_id == id)
    }
}

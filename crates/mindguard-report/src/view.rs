use mindguard_core::models::assessment::AssessmentOutcome;
use mindguard_core::models::prediction::{PredictionOutcome, Probabilities};
use mindguard_core::models::recommendation::Recommendation;
use serde::Serialize;

/// Display-ready projection of an [`AssessmentOutcome`]. Every number is
/// pre-formatted so templates never do arithmetic.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub assessed_at: String,
    pub questionnaire_risk: String,
    pub scales: Vec<ScaleLine>,
    pub self_harm_alert: bool,
    pub prediction: PredictionView,
    pub recommendation: Option<Recommendation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleLine {
    pub name: String,
    pub total: u32,
    pub max: u32,
    pub severity: Option<String>,
    /// Item average to two decimals.
    pub average: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionView {
    /// "predicted", "failed" or "disabled".
    pub status: &'static str,
    pub label: Option<String>,
    pub probabilities_supported: bool,
    pub probabilities: Vec<ProbabilityLine>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityLine {
    pub label: String,
    /// Percentage to two decimals, without the `%` sign.
    pub percent: String,
}

impl From<&AssessmentOutcome> for SummaryView {
    fn from(outcome: &AssessmentOutcome) -> Self {
        let scales = outcome
            .scales
            .iter()
            .map(|s| ScaleLine {
                name: s.result.scale_id.display_name().to_string(),
                total: s.result.total,
                max: s.max_score,
                severity: s.severity.map(|b| b.to_string()),
                average: s.average.map(|a| format!("{a:.2}")),
            })
            .collect();

        Self {
            assessed_at: outcome.assessed_at.to_string(),
            questionnaire_risk: outcome.questionnaire_risk.to_string(),
            scales,
            self_harm_alert: outcome.self_harm_alert,
            prediction: PredictionView::from(&outcome.prediction),
            recommendation: outcome.recommendation.clone(),
        }
    }
}

impl From<&PredictionOutcome> for PredictionView {
    fn from(prediction: &PredictionOutcome) -> Self {
        match prediction {
            PredictionOutcome::Predicted { result } => PredictionView {
                status: "predicted",
                label: Some(result.label.to_string()),
                probabilities_supported: matches!(
                    result.probabilities,
                    Probabilities::Available(_)
                ),
                probabilities: result
                    .probabilities
                    .as_slice()
                    .iter()
                    .map(|p| ProbabilityLine {
                        label: p.label.to_string(),
                        percent: format!("{:.2}", p.probability * 100.0),
                    })
                    .collect(),
                reason: None,
            },
            PredictionOutcome::Failed { reason } => PredictionView {
                status: "failed",
                label: None,
                probabilities_supported: false,
                probabilities: Vec::new(),
                reason: Some(reason.clone()),
            },
            PredictionOutcome::Disabled { reason } => PredictionView {
                status: "disabled",
                label: None,
                probabilities_supported: false,
                probabilities: Vec::new(),
                reason: Some(reason.clone()),
            },
        }
    }
}

//! One submission in, one [`AssessmentOutcome`] out.
//!
//! Scoring never depends on the classifier: a disabled or failing model
//! still yields every scale score and the questionnaire risk.

use jiff::Timestamp;
use mindguard_core::models::assessment::{AssessmentOutcome, ScaleSummary, Submission};
use mindguard_core::models::features::{FeatureRecord, ScaleTotals};
use mindguard_core::models::scale::ScaleId;
use mindguard_predict::predictor::PredictorStatus;
use mindguard_predict::recommendations::recommendation_for;
use mindguard_scales::fusion::fuse_totals;
use mindguard_scales::scales::phq9::self_harm_indicated;
use mindguard_scales::{Scale, all_scales};
use tracing::{debug, info, warn};

use crate::error::AssessmentError;

/// Assess a submission, stamping it with the current time.
pub fn assess(
    submission: &Submission,
    predictor: &PredictorStatus,
) -> Result<AssessmentOutcome, AssessmentError> {
    assess_at(submission, predictor, Timestamp::now())
}

/// Assess a submission with an explicit timestamp.
pub fn assess_at(
    submission: &Submission,
    predictor: &PredictorStatus,
    assessed_at: Timestamp,
) -> Result<AssessmentOutcome, AssessmentError> {
    submission.demographics.validate()?;

    let scales = all_scales();
    let invalid: Vec<_> = scales
        .iter()
        .flat_map(|scale| scale.validate_responses(submission.responses.for_scale(scale.id())))
        .collect();
    if !invalid.is_empty() {
        warn!(count = invalid.len(), "submission rejected");
        return Err(AssessmentError::InvalidResponses(invalid));
    }

    let summaries = scales
        .iter()
        .map(|scale| summarize(scale.as_ref(), submission.responses.for_scale(scale.id())))
        .collect::<Result<Vec<_>, _>>()?;

    let totals = ScaleTotals {
        depression: total_of(&summaries, ScaleId::Phq9),
        anxiety: total_of(&summaries, ScaleId::Gad7),
        stress: total_of(&summaries, ScaleId::Pss10),
        social_support: total_of(&summaries, ScaleId::Mspss),
    };
    let questionnaire_risk = fuse_totals(&totals);
    let self_harm_alert = summaries
        .iter()
        .any(|s| self_harm_indicated(&s.result));

    info!(
        depression = totals.depression,
        anxiety = totals.anxiety,
        stress = totals.stress,
        social_support = totals.social_support,
        risk = %questionnaire_risk,
        self_harm_alert,
        "questionnaires scored"
    );

    let record = FeatureRecord::assemble(&submission.demographics, totals);
    let prediction = predictor.predict(record);
    let recommendation = prediction
        .result()
        .and_then(|result| recommendation_for(&result.label));

    Ok(AssessmentOutcome {
        assessed_at,
        scales: summaries,
        questionnaire_risk,
        self_harm_alert,
        prediction,
        recommendation,
    })
}

fn summarize(scale: &dyn Scale, responses: &[String]) -> Result<ScaleSummary, AssessmentError> {
    let result = scale.score(responses)?;
    let severity = match scale.severity_table() {
        Some(_) => Some(scale.severity(result.total)?),
        None => None,
    };
    let average = match scale.id() {
        ScaleId::Mspss => Some(result.average()),
        _ => None,
    };
    debug!(scale = %scale.id(), total = result.total, "scale scored");

    Ok(ScaleSummary {
        max_score: scale.definition().max_score,
        result,
        severity,
        average,
    })
}

fn total_of(summaries: &[ScaleSummary], id: ScaleId) -> u32 {
    summaries
        .iter()
        .find(|s| s.result.scale_id == id)
        .map(|s| s.result.total)
        .unwrap_or_default()
}

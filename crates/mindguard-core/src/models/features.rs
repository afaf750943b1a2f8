use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::demographics::Demographics;

/// Field names in the order the risk model was trained on.
pub const FEATURE_NAMES: [&str; 12] = [
    "age",
    "gender",
    "employment_status",
    "work_environment",
    "mental_health_history",
    "seeks_treatment",
    "sleep_hours",
    "physical_activity_days",
    "depression_score",
    "anxiety_score",
    "productivity_score",
    "social_support_score",
];

/// Totals of the four questionnaires, as fed to the feature assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleTotals {
    /// PHQ-9 total.
    pub depression: u32,
    /// GAD-7 total.
    pub anxiety: u32,
    /// PSS-10 total.
    pub stress: u32,
    /// MSPSS total.
    pub social_support: u32,
}

/// A single scalar in a [`FeatureRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Number(f64),
    Category(&'a str),
}

/// Flat input record for the risk classifier.
///
/// The PSS-10 total is exposed as `productivity_score`. The name is wrong
/// for what it holds, but it is the column name the trained model expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureRecord {
    age: u32,
    gender: String,
    employment_status: String,
    work_environment: String,
    mental_health_history: String,
    seeks_treatment: String,
    sleep_hours: u32,
    physical_activity_days: u32,
    depression_score: u32,
    anxiety_score: u32,
    productivity_score: u32,
    social_support_score: u32,
}

impl FeatureRecord {
    /// Merge demographics with the questionnaire totals. Pure renaming; no
    /// value is transformed.
    pub fn assemble(demographics: &Demographics, totals: ScaleTotals) -> Self {
        Self {
            age: demographics.age,
            gender: demographics.gender.as_str().to_string(),
            employment_status: demographics.employment_status.as_str().to_string(),
            work_environment: demographics.work_environment.as_str().to_string(),
            mental_health_history: demographics.mental_health_history.as_str().to_string(),
            seeks_treatment: demographics.seeks_treatment.as_str().to_string(),
            sleep_hours: demographics.sleep_hours,
            physical_activity_days: demographics.physical_activity_days,
            depression_score: totals.depression,
            anxiety_score: totals.anxiety,
            productivity_score: totals.stress,
            social_support_score: totals.social_support,
        }
    }

    /// Look up a field by its model column name.
    pub fn get(&self, name: &str) -> Option<FeatureValue<'_>> {
        let value = match name {
            "age" => FeatureValue::Number(f64::from(self.age)),
            "gender" => FeatureValue::Category(&self.gender),
            "employment_status" => FeatureValue::Category(&self.employment_status),
            "work_environment" => FeatureValue::Category(&self.work_environment),
            "mental_health_history" => FeatureValue::Category(&self.mental_health_history),
            "seeks_treatment" => FeatureValue::Category(&self.seeks_treatment),
            "sleep_hours" => FeatureValue::Number(f64::from(self.sleep_hours)),
            "physical_activity_days" => {
                FeatureValue::Number(f64::from(self.physical_activity_days))
            }
            "depression_score" => FeatureValue::Number(f64::from(self.depression_score)),
            "anxiety_score" => FeatureValue::Number(f64::from(self.anxiety_score)),
            "productivity_score" => FeatureValue::Number(f64::from(self.productivity_score)),
            "social_support_score" => FeatureValue::Number(f64::from(self.social_support_score)),
            _ => return None,
        };
        Some(value)
    }

    /// All fields in [`FEATURE_NAMES`] order.
    pub fn fields(&self) -> Vec<(&'static str, FeatureValue<'_>)> {
        FEATURE_NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
            .collect()
    }
}

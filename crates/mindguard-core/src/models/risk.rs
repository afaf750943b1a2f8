use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk level fused from the PHQ-9, GAD-7 and PSS-10 totals.
///
/// Ordered `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OverallRisk {
    Low,
    Moderate,
    High,
}

impl fmt::Display for OverallRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverallRisk::Low => "Low",
            OverallRisk::Moderate => "Moderate",
            OverallRisk::High => "High",
        })
    }
}

/// Risk label reported by the classifier.
///
/// Class ids 0, 1 and 2 map to `Low`, `Medium` and `High`. Any other id is
/// carried through verbatim in its string form. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(into = "String", from = "String")]
#[ts(export, type = "string")]
pub enum RiskLabel {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl RiskLabel {
    pub fn from_class_id(class_id: i64) -> Self {
        match class_id {
            0 => RiskLabel::Low,
            1 => RiskLabel::Medium,
            2 => RiskLabel::High,
            other => RiskLabel::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
            RiskLabel::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RiskLabel> for String {
    fn from(label: RiskLabel) -> Self {
        label.as_str().to_string()
    }
}

impl From<String> for RiskLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Low" => RiskLabel::Low,
            "Medium" => RiskLabel::Medium,
            "High" => RiskLabel::High,
            _ => RiskLabel::Unrecognized(raw),
        }
    }
}

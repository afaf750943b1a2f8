use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative band derived from a scale total. Each scale uses an ordered
/// subset of these (PHQ-9: Minimal..Severe, PSS-10: Low/Moderate/High).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Minimal,
    Low,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    High,
}

impl SeverityBand {
    pub fn label(&self) -> &'static str {
        match self {
            SeverityBand::Minimal => "Minimal",
            SeverityBand::Low => "Low",
            SeverityBand::Mild => "Mild",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::ModeratelySevere => "Moderately Severe",
            SeverityBand::Severe => "Severe",
            SeverityBand::High => "High",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub mod gad7;
pub mod mspss;
pub mod phq9;
pub mod pss10;

use mindguard_core::models::scale::ScaleId;

use crate::scoring::{ResponseOption, ScaleDefinition};

/// Two-week symptom frequency options shared by PHQ-9 and GAD-7.
pub(crate) const FREQUENCY_OPTIONS: [(&str, u32); 4] = [
    ("Not at all", 0),
    ("Several days", 1),
    ("More than half the days", 2),
    ("Nearly every day", 3),
];

pub(crate) fn build_definition(
    id: ScaleId,
    items: &[&str],
    options: &[(&str, u32)],
    reverse_indices: &[usize],
    max_score: u32,
    description: &str,
) -> ScaleDefinition {
    ScaleDefinition {
        id,
        items: items.iter().map(|s| s.to_string()).collect(),
        options: options
            .iter()
            .map(|(label, value)| ResponseOption {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
        reverse_indices: reverse_indices.iter().copied().collect(),
        max_score,
        description: Some(description.to_string()),
    }
}

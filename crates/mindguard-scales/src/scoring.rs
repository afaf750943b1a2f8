use std::collections::BTreeSet;

use mindguard_core::models::scale::{ScaleId, ScaleResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::ScaleError;

/// One answer option and the value it scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub label: String,
    pub value: u32,
}

/// Static metadata for one questionnaire.
///
/// `options` is ordered; values are contiguous, starting at 0 for every
/// scale except MSPSS, which starts at 1.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: ScaleId,
    pub items: Vec<String>,
    pub options: Vec<ResponseOption>,
    /// 0-based positions of reverse-scored items.
    pub reverse_indices: BTreeSet<usize>,
    pub max_score: u32,
    pub description: Option<String>,
}

impl ScaleDefinition {
    pub fn option_labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.label.as_str())
    }

    pub fn option_value(&self, label: &str) -> Option<u32> {
        self.options
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.value)
    }

    /// Lowest reachable total: every item at the lowest option value.
    pub fn min_score(&self) -> u32 {
        let lowest = self.options.iter().map(|o| o.value).min().unwrap_or(0);
        lowest * self.items.len() as u32
    }

    pub fn is_reversed(&self, item: usize) -> bool {
        self.reverse_indices.contains(&item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    WrongLength,
    UnknownOption,
}

/// A problem with a caller-supplied response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub scale_id: ScaleId,
    /// 0-based item position, when the problem is tied to one item.
    pub item: Option<usize>,
    pub kind: ValidationKind,
    pub message: String,
}

/// Check a response set against a definition without scoring it.
pub fn validate_responses(
    definition: &ScaleDefinition,
    responses: &[String],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if responses.len() != definition.items.len() {
        errors.push(ValidationError {
            scale_id: definition.id,
            item: None,
            kind: ValidationKind::WrongLength,
            message: format!(
                "{}: expected {} responses, got {}",
                definition.id,
                definition.items.len(),
                responses.len(),
            ),
        });
    }

    for (i, choice) in responses.iter().enumerate() {
        if definition.option_value(choice).is_none() {
            errors.push(ValidationError {
                scale_id: definition.id,
                item: Some(i),
                kind: ValidationKind::UnknownOption,
                message: format!(
                    "{}: item {} answer '{}' is not one of [{}]",
                    definition.id,
                    i + 1,
                    choice,
                    definition.option_labels().collect::<Vec<_>>().join(", "),
                ),
            });
        }
    }

    errors
}

/// Score one response set.
///
/// Each choice is mapped through the option table. Reverse-scored items are
/// mirrored on the 0-based option index: `(option_count - 1) - value`. That
/// formula only holds for 0-based scales; MSPSS is 1-based and has no
/// reversed items.
pub fn score_responses(
    definition: &ScaleDefinition,
    responses: &[String],
) -> Result<ScaleResult, ScaleError> {
    let errors = validate_responses(definition, responses);
    if !errors.is_empty() {
        return Err(ScaleError::InvalidResponses {
            scale_id: definition.id,
            errors,
        });
    }

    let top_index = definition.options.len().saturating_sub(1) as u32;
    let mut per_item_scores = Vec::with_capacity(responses.len());
    for (i, choice) in responses.iter().enumerate() {
        let raw = definition.option_value(choice).unwrap_or_default();
        let value = if definition.is_reversed(i) {
            top_index.saturating_sub(raw)
        } else {
            raw
        };
        per_item_scores.push(value);
    }

    let total: u32 = per_item_scores.iter().sum();
    if total > definition.max_score {
        return Err(ScaleError::ScoreOutOfRange {
            scale_id: definition.id,
            total,
            min: definition.min_score(),
            max: definition.max_score,
        });
    }

    Ok(ScaleResult {
        scale_id: definition.id,
        total,
        per_item_scores,
        per_item_choices: responses.to_vec(),
    })
}

use mindguard_core::models::scale::{ScaleId, ScaleResult};
use mindguard_core::models::severity::SeverityBand;

use crate::scales::{FREQUENCY_OPTIONS, build_definition};
use crate::scoring::ScaleDefinition;
use crate::severity::SeverityTable;
use crate::Scale;

/// Position of "thoughts that you would be better off dead or of hurting
/// yourself".
pub const SELF_HARM_ITEM: usize = 8;

static SEVERITY: SeverityTable = SeverityTable::new(
    &[
        (4, SeverityBand::Minimal),
        (9, SeverityBand::Mild),
        (14, SeverityBand::Moderate),
        (19, SeverityBand::ModeratelySevere),
    ],
    SeverityBand::Severe,
);

/// PHQ-9: Patient Health Questionnaire.
/// 9 items over the last two weeks, each 0–3. Total 0–27.
pub struct Phq9;

impl Scale for Phq9 {
    fn id(&self) -> ScaleId {
        ScaleId::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9 (Depression)"
    }

    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            build_definition(
                ScaleId::Phq9,
                &[
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed or hopeless",
                    "Trouble falling asleep, staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself, or that you're a failure or have let yourself or your family down",
                    "Trouble concentrating on things, such as reading or watching television",
                    "Moving or speaking so slowly that other people could have noticed; or the opposite, being so fidgety or restless",
                    "Thoughts that you would be better off dead or of hurting yourself in some way",
                ],
                &FREQUENCY_OPTIONS,
                &[],
                27,
                "Mood and depressive symptoms over the past two weeks",
            )
        });
        &DEFINITION
    }

    fn severity_table(&self) -> Option<&SeverityTable> {
        Some(&SEVERITY)
    }
}

/// True when the self-harm item was answered above "Not at all".
pub fn self_harm_indicated(result: &ScaleResult) -> bool {
    result.scale_id == ScaleId::Phq9
        && result
            .per_item_scores
            .get(SELF_HARM_ITEM)
            .is_some_and(|score| *score > 0)
}

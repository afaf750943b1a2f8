use mindguard_core::models::scale::ScaleId;
use mindguard_core::models::severity::SeverityBand;

use crate::scales::{FREQUENCY_OPTIONS, build_definition};
use crate::scoring::ScaleDefinition;
use crate::severity::SeverityTable;
use crate::Scale;

static SEVERITY: SeverityTable = SeverityTable::new(
    &[
        (4, SeverityBand::Minimal),
        (9, SeverityBand::Mild),
        (14, SeverityBand::Moderate),
    ],
    SeverityBand::Severe,
);

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, same 0–3 frequency options as PHQ-9. Total 0–21.
pub struct Gad7;

impl Scale for Gad7 {
    fn id(&self) -> ScaleId {
        ScaleId::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7 (Anxiety)"
    }

    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            build_definition(
                ScaleId::Gad7,
                &[
                    "Feeling nervous, anxious or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it is hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid as if something awful might happen",
                ],
                &FREQUENCY_OPTIONS,
                &[],
                21,
                "Anxiety symptoms over the past two weeks",
            )
        });
        &DEFINITION
    }

    fn severity_table(&self) -> Option<&SeverityTable> {
        Some(&SEVERITY)
    }
}

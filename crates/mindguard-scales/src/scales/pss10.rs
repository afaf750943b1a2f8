use mindguard_core::models::scale::ScaleId;
use mindguard_core::models::severity::SeverityBand;

use crate::scales::build_definition;
use crate::scoring::ScaleDefinition;
use crate::severity::SeverityTable;
use crate::Scale;

/// Positively worded items (confident, going your way, control irritations,
/// on top of things).
pub const REVERSED_ITEMS: [usize; 4] = [3, 4, 6, 7];

static SEVERITY: SeverityTable = SeverityTable::new(
    &[(13, SeverityBand::Low), (26, SeverityBand::Moderate)],
    SeverityBand::High,
);

/// PSS-10: Perceived Stress Scale.
/// 10 items over the last month, each 0–4, four of them reverse-scored.
/// Total 0–40.
pub struct Pss10;

impl Scale for Pss10 {
    fn id(&self) -> ScaleId {
        ScaleId::Pss10
    }

    fn name(&self) -> &str {
        "PSS-10 (Stress)"
    }

    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            build_definition(
                ScaleId::Pss10,
                &[
                    "In the last month, how often have you been upset because of something unexpected?",
                    "In the last month, how often have you felt unable to control important things in your life?",
                    "In the last month, how often have you felt nervous and stressed?",
                    "In the last month, how often have you felt confident about handling personal problems?",
                    "In the last month, how often have you felt that things were going your way?",
                    "In the last month, how often have you found that you could not cope with all the things you had to do?",
                    "In the last month, how often have you been able to control irritations in your life?",
                    "In the last month, how often have you felt you were on top of things?",
                    "In the last month, how often have you been angered because of things outside your control?",
                    "In the last month, how often have you felt difficulties piling up so high that you could not overcome them?",
                ],
                &[
                    ("Never", 0),
                    ("Almost Never", 1),
                    ("Sometimes", 2),
                    ("Fairly Often", 3),
                    ("Very Often", 4),
                ],
                &REVERSED_ITEMS,
                40,
                "Feelings and thoughts during the last month",
            )
        });
        &DEFINITION
    }

    fn severity_table(&self) -> Option<&SeverityTable> {
        Some(&SEVERITY)
    }
}

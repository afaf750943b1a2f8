use mindguard_core::models::scale::ScaleId;

use crate::scales::build_definition;
use crate::scoring::ScaleDefinition;
use crate::Scale;

/// MSPSS: Multidimensional Scale of Perceived Social Support.
/// 16 items, each 1–5. Total 16–80, usually reported as the item average.
/// No severity bands and no reverse-scored items.
pub struct Mspss;

impl Scale for Mspss {
    fn id(&self) -> ScaleId {
        ScaleId::Mspss
    }

    fn name(&self) -> &str {
        "MSPSS (Social Support)"
    }

    fn definition(&self) -> &ScaleDefinition {
        static DEFINITION: std::sync::LazyLock<ScaleDefinition> = std::sync::LazyLock::new(|| {
            build_definition(
                ScaleId::Mspss,
                &[
                    "Someone you can count on to listen to you when you need to talk",
                    "Someone to give you good advice about a crisis",
                    "Someone to take you to the doctor if you needed it",
                    "Someone who shows you love and affection",
                    "Someone to give you information to help you understand a situation",
                    "Someone to confide in or talk to about yourself or your problems",
                    "Someone to get together with for relaxation",
                    "Someone to prepare your meals if you were unable to do it yourself",
                    "Someone whose advice you really want",
                    "Someone to do things with to help you get your mind off things",
                    "Someone to help with daily chores if you were sick",
                    "Someone to share your most private worries and fears with",
                    "Someone to turn to for suggestions about how to deal with a personal problem",
                    "Someone to do something enjoyable with",
                    "Someone who understands your problems",
                    "Someone to love and make you feel wanted",
                ],
                &[
                    ("None of the time", 1),
                    ("A little of the time", 2),
                    ("Some of the time", 3),
                    ("Most of the time", 4),
                    ("All of the time", 5),
                ],
                &[],
                80,
                "How you and your surroundings are doing in daily life",
            )
        });
        &DEFINITION
    }
}

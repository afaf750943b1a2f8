use mindguard_core::models::recommendation::Recommendation;
use mindguard_core::models::risk::RiskLabel;

const ONLINE_HELP: &str = "https://www.betterhelp.com/";

/// Recommendation bundle for a predicted label. Unrecognized labels have
/// none.
pub fn recommendation_for(label: &RiskLabel) -> Option<Recommendation> {
    static CATALOG: std::sync::LazyLock<[Recommendation; 3]> = std::sync::LazyLock::new(|| {
        [
            bundle(
                "Your mental health looks stable. Take some time to relax and enjoy life!",
                &["The Alchemist by Paulo Coelho", "Atomic Habits by James Clear"],
                &["Inside Out", "Forrest Gump"],
                &["Meditation", "Daily journaling", "Light exercise"],
                None,
            ),
            bundle(
                "Your stress/anxiety levels are moderate. Consider self-care and supportive resources.",
                &[
                    "Feeling Good by David D. Burns",
                    "The Happiness Project by Gretchen Rubin",
                ],
                &["Eat Pray Love", "The Pursuit of Happyness"],
                &["Mindfulness exercises", "Yoga", "Talking to friends/family"],
                Some(ONLINE_HELP),
            ),
            bundle(
                "Your risk is high. Immediate support is recommended.",
                &["Lost Connections by Johann Hari"],
                &["Silver Linings Playbook", "A Beautiful Mind"],
                &["Seek professional help immediately", "Avoid isolation"],
                Some(ONLINE_HELP),
            ),
        ]
    });

    let index = match label {
        RiskLabel::Low => 0,
        RiskLabel::Medium => 1,
        RiskLabel::High => 2,
        RiskLabel::Unrecognized(_) => return None,
    };
    Some(CATALOG[index].clone())
}

fn bundle(
    message: &str,
    books: &[&str],
    movies: &[&str],
    activities: &[&str],
    online_help: Option<&str>,
) -> Recommendation {
    Recommendation {
        message: message.to_string(),
        books: owned(books),
        movies: owned(movies),
        activities: owned(activities),
        online_help: online_help.map(str::to_string),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Self-care suggestions shown for a predicted risk label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub message: String,
    pub books: Vec<String>,
    pub movies: Vec<String>,
    pub activities: Vec<String>,
    /// Link to an online counselling service, if one is suggested.
    pub online_help: Option<String>,
}

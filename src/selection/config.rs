use chrono::Duration;

use crate::cache::DEFAULT_TTL_MS;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionConfig {
    pub governorates_key: String,
    pub offices_key: String,
    pub ttl_ms: i64,
    /// How many leading directory names are eligible for random picks.
    pub candidate_window: usize,
    pub governorate_picks: usize,
    pub cairo_office_picks: usize,
    pub giza_office_picks: usize,
}

impl SelectionConfig {
    pub fn v1() -> Self {
        Self {
            governorates_key: "most_visited_govs_v1".into(),
            offices_key: "most_visited_offices_v1".into(),
            ttl_ms: DEFAULT_TTL_MS,
            candidate_window: 20,
            governorate_picks: 5,
            cairo_office_picks: 4,
            giza_office_picks: 2,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::milliseconds(self.ttl_ms)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::v1()
    }
}

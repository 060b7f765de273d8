use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted selection result.
///
/// Serialized as `{"timestamp": <epoch millis>, "data": ...}` so entries
/// written by the browser client read back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub data: T,
}

impl<T> CacheEntry<T> {
    pub fn new(timestamp: DateTime<Utc>, data: T) -> Self {
        CacheEntry { timestamp, data }
    }
}

use serde::{Deserialize, Serialize};

/// A scheduled valet job at a location. Events come back from the API
/// wholesale on every fetch; the client never mutates one in place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub location_id: i64,
    pub name: String,
    /// ISO calendar date, e.g. "2025-08-09".
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub notes: String,
}

/// The POST /events body. The API takes `eventName` here even though it
/// returns `name` on reads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub location_id: i64,
    pub event_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub notes: String,
}

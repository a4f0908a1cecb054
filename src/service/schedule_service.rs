use std::collections::BTreeMap;

use crate::models::event::Event;

/// The user's current location selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFilter {
    All,
    Location(i64),
}

impl LocationFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Location(id) => event.location_id == *id,
        }
    }
}

/// Events sharing one calendar date, displayed together under one heading.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: String,
    pub events: Vec<Event>,
}

/// Filters events by location and groups them by date, groups sorted
/// ascending by the ISO date string (which is chronological for well-formed
/// dates; malformed ones just sort as strings). Within a group the input
/// order is preserved. Dates with no matching events produce no group.
pub fn project_schedule(events: &[Event], filter: &LocationFilter) -> Vec<DayGroup> {
    let mut by_date: BTreeMap<String, Vec<Event>> = BTreeMap::new();
    for event in events {
        if !filter.matches(event) {
            continue;
        }
        by_date
            .entry(event.date.clone())
            .or_default()
            .push(event.clone());
    }
    by_date
        .into_iter()
        .map(|(date, events)| DayGroup { date, events })
        .collect()
}

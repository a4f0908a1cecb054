use crate::models::event::Event;
use crate::service::schedule_service::{project_schedule, DayGroup, LocationFilter};

/// Everything the schedule screen needs. Owned by whichever loop is driving
/// the UI; only `reduce` produces new values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    pub events: Vec<Event>,
    pub filter: LocationFilter,
    /// True while a create-event submission is in flight. Stands in for the
    /// disabled submit button: a second submit during this window is ignored.
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleMsg {
    /// Result of a GET /events round trip. An Err means "no update": the
    /// previous event list stays as it was and nothing is shown to the user.
    EventsFetched(Result<Vec<Event>, String>),
    FilterChanged(LocationFilter),
    SubmitStarted,
    SubmitFinished,
}

impl ScheduleState {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            filter: LocationFilter::All,
            submitting: false,
        }
    }

    pub fn visible_groups(&self) -> Vec<DayGroup> {
        project_schedule(&self.events, &self.filter)
    }
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure reducer. State transitions are testable without any rendering or
/// network in the way.
pub fn reduce(state: &ScheduleState, msg: ScheduleMsg) -> ScheduleState {
    let mut next = state.clone();
    match msg {
        ScheduleMsg::EventsFetched(Ok(items)) => {
            next.events = items;
        }
        ScheduleMsg::EventsFetched(Err(_)) => {}
        ScheduleMsg::FilterChanged(filter) => {
            next.filter = filter;
        }
        ScheduleMsg::SubmitStarted => {
            next.submitting = true;
        }
        ScheduleMsg::SubmitFinished => {
            next.submitting = false;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64, location_id: i64, date: &str) -> Event {
        Event {
            id,
            location_id,
            name: format!("Event {}", id),
            date: date.to_string(),
            start_time: "5:00 PM".to_string(),
            end_time: "9:00 PM".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn successful_fetch_replaces_events_wholesale() {
        let state = reduce(
            &ScheduleState::new(),
            ScheduleMsg::EventsFetched(Ok(vec![event(1, 1, "2025-08-09")])),
        );
        let state = reduce(
            &state,
            ScheduleMsg::EventsFetched(Ok(vec![event(2, 2, "2025-07-30")])),
        );
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].id, 2);
    }

    #[test]
    fn failed_fetch_keeps_previous_events() {
        let state = reduce(
            &ScheduleState::new(),
            ScheduleMsg::EventsFetched(Ok(vec![event(1, 1, "2025-08-09")])),
        );
        let after = reduce(
            &state,
            ScheduleMsg::EventsFetched(Err("connection refused".to_string())),
        );
        assert_eq!(after, state);
    }

    #[test]
    fn filter_change_only_touches_the_filter() {
        let state = reduce(
            &ScheduleState::new(),
            ScheduleMsg::EventsFetched(Ok(vec![event(1, 1, "2025-08-09")])),
        );
        let after = reduce(&state, ScheduleMsg::FilterChanged(LocationFilter::Location(1)));
        assert_eq!(after.filter, LocationFilter::Location(1));
        assert_eq!(after.events, state.events);
    }

    #[test]
    fn submit_window_opens_once_and_closes() {
        let state = reduce(&ScheduleState::new(), ScheduleMsg::SubmitStarted);
        assert!(state.submitting);
        let still = reduce(&state, ScheduleMsg::SubmitStarted);
        assert!(still.submitting);
        let done = reduce(&still, ScheduleMsg::SubmitFinished);
        assert!(!done.submitting);
    }

    #[test]
    fn visible_groups_follow_the_filter() {
        let state = reduce(
            &ScheduleState::new(),
            ScheduleMsg::EventsFetched(Ok(vec![
                event(1, 1, "2025-08-09"),
                event(2, 2, "2025-08-09"),
            ])),
        );
        let state = reduce(&state, ScheduleMsg::FilterChanged(LocationFilter::Location(2)));
        let groups = state.visible_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].events[0].id, 2);
    }
}

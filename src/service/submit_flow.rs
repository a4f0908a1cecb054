use crate::models::event::EventDraft;
use crate::service::events_service::EventsApi;
use crate::state::{reduce, ScheduleMsg, ScheduleState};

/// Fetch the event list and fold the outcome into the state. A failed or
/// malformed fetch leaves the previous list untouched; nothing is surfaced
/// to the user either way.
pub async fn refresh_events<A: EventsApi + ?Sized>(
    api: &A,
    state: &ScheduleState,
) -> ScheduleState {
    let fetched = api.list_events().await.map_err(|e| e.to_string());
    reduce(state, ScheduleMsg::EventsFetched(fetched))
}

/// Submit a new event, then re-fetch the list so the new entry shows up.
/// While a submission is already in flight the call is a no-op, mirroring
/// the disabled submit button. Failures are swallowed: the schedule simply
/// does not change.
pub async fn submit_event<A: EventsApi + ?Sized>(
    api: &A,
    state: &ScheduleState,
    draft: EventDraft,
) -> ScheduleState {
    if state.submitting {
        return state.clone();
    }

    let mut next = reduce(state, ScheduleMsg::SubmitStarted);
    if api.create_event(&draft).await.is_ok() {
        let fetched = api.list_events().await.map_err(|e| e.to_string());
        next = reduce(&next, ScheduleMsg::EventsFetched(fetched));
    }
    reduce(&next, ScheduleMsg::SubmitFinished)
}

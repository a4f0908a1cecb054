use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use valetHub::models::event::{Event, EventDraft};
use valetHub::service::events_service::EventsApi;
use valetHub::service::submit_flow::{refresh_events, submit_event};
use valetHub::state::ScheduleState;

struct FakeEventsApi {
    list_result: Mutex<Result<Vec<Event>, String>>,
    create_fails: bool,
    created: Arc<Mutex<Vec<EventDraft>>>,
}

impl FakeEventsApi {
    fn returning(items: Vec<Event>) -> Self {
        Self {
            list_result: Mutex::new(Ok(items)),
            create_fails: false,
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing_list(message: &str) -> Self {
        Self {
            list_result: Mutex::new(Err(message.to_string())),
            create_fails: false,
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl EventsApi for FakeEventsApi {
    async fn list_events(&self) -> Result<Vec<Event>, Box<dyn std::error::Error + Send + Sync>> {
        match &*self.list_result.lock().await {
            Ok(items) => Ok(items.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }

    async fn create_event(
        &self,
        draft: &EventDraft,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.create_fails {
            return Err("server rejected the event".to_string().into());
        }
        self.created.lock().await.push(draft.clone());
        Ok(())
    }
}

fn event(id: i64, location_id: i64, date: &str) -> Event {
    Event {
        id,
        location_id,
        name: format!("Event {}", id),
        date: date.to_string(),
        start_time: "6:00 PM".to_string(),
        end_time: "10:00 PM".to_string(),
        notes: String::new(),
    }
}

fn draft() -> EventDraft {
    EventDraft {
        location_id: 1,
        event_name: "Wedding Reception".to_string(),
        date: "2025-08-30".to_string(),
        start_time: "6:00 PM".to_string(),
        end_time: "11:00 PM".to_string(),
        notes: "200 people, 4 valets.".to_string(),
    }
}

#[tokio::test]
async fn submit_posts_the_draft_then_refetches() {
    let api = FakeEventsApi::returning(vec![event(101, 1, "2025-08-09")]);

    let state = submit_event(&api, &ScheduleState::new(), draft()).await;

    let created = api.created.lock().await;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].event_name, "Wedding Reception");
    assert_eq!(state.events.len(), 1);
    assert!(!state.submitting);
}

#[tokio::test]
async fn submit_is_ignored_while_a_submission_is_in_flight() {
    let api = FakeEventsApi::returning(vec![]);
    let mut state = ScheduleState::new();
    state.submitting = true;

    let after = submit_event(&api, &state, draft()).await;

    assert!(api.created.lock().await.is_empty());
    assert_eq!(after, state);
}

#[tokio::test]
async fn failed_create_leaves_the_schedule_silently_unchanged() {
    let mut api = FakeEventsApi::returning(vec![event(101, 1, "2025-08-09")]);
    api.create_fails = true;

    let before = refresh_events(&api, &ScheduleState::new()).await;
    let after = submit_event(&api, &before, draft()).await;

    assert_eq!(after.events, before.events);
    assert!(!after.submitting);
}

#[tokio::test]
async fn failed_refetch_after_create_keeps_the_previous_list() {
    let api = FakeEventsApi::returning(vec![event(101, 1, "2025-08-09")]);
    let seeded = refresh_events(&api, &ScheduleState::new()).await;

    *api.list_result.lock().await = Err("connection reset".to_string());
    let after = submit_event(&api, &seeded, draft()).await;

    assert_eq!(api.created.lock().await.len(), 1);
    assert_eq!(after.events, seeded.events);
}

#[tokio::test]
async fn failed_refresh_reaches_the_error_path_but_stays_silent() {
    let api = FakeEventsApi::failing_list("503 from upstream");
    let state = refresh_events(&api, &ScheduleState::new()).await;
    assert!(state.events.is_empty());
}

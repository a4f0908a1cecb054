use std::sync::Arc;

use tokio::sync::Mutex;
use warp::Filter;

use crate::models::event::{Event, EventDraft};

pub type SharedEvents = Arc<Mutex<Vec<Event>>>;

/// Local stand-in for the real events backend. Serves the same
/// GET/POST /events pair over an in-memory list so the cli and ui modes can
/// be exercised without the production service.
pub async fn run_mock_api(port: u16) {
    let events: SharedEvents = Arc::new(Mutex::new(seed_events()));
    let routes = event_routes(events);
    println!("Mock events API listening on http://127.0.0.1:{}", port);
    warp::serve(routes).run(([127, 0, 0, 1], port)).await;
}

pub fn event_routes(
    events: SharedEvents,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list = {
        let events = events.clone();
        warp::path("events")
            .and(warp::path::end())
            .and(warp::get())
            .and_then(move || {
                let events = events.clone();
                async move {
                    let items = events.lock().await.clone();
                    Ok::<_, warp::Rejection>(warp::reply::json(&serde_json::json!({
                        "success": true,
                        "items": items,
                    })))
                }
            })
    };

    let create = {
        warp::path("events")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |draft: EventDraft| {
                let events = events.clone();
                async move {
                    let mut items = events.lock().await;
                    let next_id = items.iter().map(|e| e.id).max().unwrap_or(100) + 1;
                    items.push(Event {
                        id: next_id,
                        location_id: draft.location_id,
                        name: draft.event_name,
                        date: draft.date,
                        start_time: draft.start_time,
                        end_time: draft.end_time,
                        notes: draft.notes,
                    });
                    Ok::<_, warp::Rejection>(warp::reply::json(&serde_json::json!({
                        "success": true,
                        "saved": 1,
                    })))
                }
            })
    };

    list.or(create)
}

/// Sample schedule matching the data the UI was built against.
pub fn seed_events() -> Vec<Event> {
    let samples = [
        (101, 1, "Wilkinson Wedding", "2025-08-09", "6:30 PM", "11:30 PM", "63 guests."),
        (102, 2, "McCarter & English Dinner", "2025-07-30", "5:30 PM", "9:30 PM", "Approx 32 guests."),
        (103, 1, "Ravee Shrinivas' Surprise 65th", "2025-07-31", "6:30 PM", "10:30 PM", "39 guests."),
        (104, 1, "Wedding Reception", "2025-08-30", "6:00 PM", "11:00 PM", "200 people, 4 valets."),
    ];
    samples
        .iter()
        .map(|(id, location_id, name, date, start, end, notes)| Event {
            id: *id,
            location_id: *location_id,
            name: name.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            notes: notes.to_string(),
        })
        .collect()
}

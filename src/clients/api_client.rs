use serde::Deserialize;

use crate::models::event::{Event, EventDraft};

#[derive(Debug, Deserialize)]
struct EventsResponse {
    items: Vec<Event>,
}

fn events_url(base_url: &str) -> String {
    format!("{}/events", base_url.trim_end_matches('/'))
}

/// GET {base}/events. The backend wraps the list as `{"success": ..,
/// "items": [..]}`; only `items` matters here. A non-2xx status or a body
/// without `items` is an error, which callers treat as "no update".
pub async fn fetch_events(
    base_url: &str,
) -> Result<Vec<Event>, Box<dyn std::error::Error + Send + Sync>> {
    let client = reqwest::Client::new();
    let response = client.get(events_url(base_url)).send().await?;

    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(format!("GET /events failed with status {}", status).into());
    }

    let parsed: EventsResponse = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse events JSON: {}\nRaw body: {}", e, text))?;
    Ok(parsed.items)
}

/// POST {base}/events. The response body is not inspected; resolving with a
/// 2xx status is the whole success criterion.
pub async fn create_event(
    base_url: &str,
    draft: &EventDraft,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = reqwest::Client::new();
    let response = client
        .post(events_url(base_url))
        .json(draft)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("POST /events failed with status {}", status).into());
    }
    Ok(())
}

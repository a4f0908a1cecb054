use async_trait::async_trait;

use crate::clients::api_client;
use crate::models::event::{Event, EventDraft};

#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>, Box<dyn std::error::Error + Send + Sync>>;

    async fn create_event(
        &self,
        draft: &EventDraft,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

pub struct HttpEventsService {
    base_url: String,
}

impl HttpEventsService {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl EventsApi for HttpEventsService {
    async fn list_events(&self) -> Result<Vec<Event>, Box<dyn std::error::Error + Send + Sync>> {
        api_client::fetch_events(&self.base_url).await
    }

    async fn create_event(
        &self,
        draft: &EventDraft,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        api_client::create_event(&self.base_url, draft).await
    }
}

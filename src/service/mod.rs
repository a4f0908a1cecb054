pub mod display_service;
pub mod events_service;
pub mod schedule_service;
pub mod submit_flow;

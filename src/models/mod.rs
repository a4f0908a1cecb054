pub mod event;
pub mod location;

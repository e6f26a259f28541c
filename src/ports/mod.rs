// src/ports/mod.rs

pub use event_publisher::EventPublisher;
pub use voice::Voice;

pub mod event_publisher;
pub mod voice;

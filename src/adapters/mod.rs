mod in_memory_events;
mod recording_voice;
mod stdout_voice;

pub use in_memory_events::InMemoryEventPublisher;
pub use recording_voice::RecordingVoice;
pub use stdout_voice::StdoutVoice;

use crate::ports::Voice;

/// Collects emitted messages in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingVoice {
    messages: Vec<String>,
}

impl RecordingVoice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Voice for RecordingVoice {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut voice = RecordingVoice::new();
        voice.emit("first");
        voice.emit("second");

        assert_eq!(voice.messages(), ["first", "second"]);
        assert_eq!(voice.last(), Some("second"));

        voice.clear();
        assert!(voice.messages().is_empty());
    }

    #[test]
    fn test_emit_through_mut_ref() {
        fn greet<V: Voice>(mut voice: V) {
            voice.emit("Woof!");
        }

        let mut voice = RecordingVoice::new();
        greet(&mut voice);
        greet(&mut voice);
        assert_eq!(voice.messages(), ["Woof!", "Woof!"]);
    }
}

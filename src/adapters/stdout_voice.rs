use crate::ports::Voice;

/// Writes each message on its own line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutVoice;

impl Voice for StdoutVoice {
    fn emit(&mut self, message: &str) {
        println!("{}", message);
    }
}

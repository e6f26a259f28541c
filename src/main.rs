use animal_factory::{
    DemoConfig, FactoryError,
    adapters::{InMemoryEventPublisher, StdoutVoice},
    factories::AnimalFactory,
    ports::Voice,
    services::DemoService,
};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = DemoConfig::from_env();
    init_tracing(config.as_ref().map_or("info", |c| c.log_level.as_str()));

    ExitCode::from(run(config, StdoutVoice))
}

/// Runs the configured script and returns the process exit status.
///
/// Rejected discriminators are not failures; a missing or broken config and
/// an aborted run are.
fn run<V: Voice>(config: Result<DemoConfig, FactoryError>, voice: V) -> u8 {
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load config");
            return 1;
        }
    };

    let mut demo = DemoService::new(AnimalFactory::new(), voice, InMemoryEventPublisher::new());

    match demo.run(&config.script) {
        Ok(_) => 0,
        Err(err) => {
            error!(error = %err, "demo aborted");
            1
        }
    }
}

/// Diagnostics go to stderr so stdout carries only what the animals say.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("animal_factory={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use animal_factory::adapters::RecordingVoice;

    #[test]
    fn test_config_error_exits_with_failure() {
        let mut voice = RecordingVoice::new();
        let status = run(Err(FactoryError::config("bad log level")), &mut voice);

        assert_eq!(status, 1);
        assert!(voice.messages().is_empty());
    }

    #[test]
    fn test_rejected_discriminator_still_succeeds() {
        let config = DemoConfig::from_toml_str(r#"script = ["dog", "cat", "lion"]"#).unwrap();
        let mut voice = RecordingVoice::new();

        assert_eq!(run(Ok(config), &mut voice), 0);
        assert_eq!(voice.messages(), ["Woof!", "Meow!"]);
    }

    #[test]
    fn test_default_config_speaks_on_stdout() {
        assert_eq!(run(Ok(DemoConfig::default()), StdoutVoice), 0);
    }
}

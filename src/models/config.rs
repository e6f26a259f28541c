use crate::{AnimalKind, FactoryError};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming the demo config file.
pub const CONFIG_ENV_VAR: &str = "ANIMAL_FACTORY_CONFIG";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Discriminators fed to the factory, in order.
    pub script: Vec<String>,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            script: AnimalKind::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, FactoryError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, FactoryError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Loads from `ANIMAL_FACTORY_CONFIG` when it is set, defaults otherwise.
    pub fn from_env() -> Result<Self, FactoryError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Unknown discriminators are allowed in the script; they exercise the
    /// rejection path. Only the log level is checked.
    pub fn validate(&self) -> Result<(), FactoryError> {
        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(FactoryError::config(format!(
                "Invalid log level: '{}'. Use trace, debug, info, warn, error or off",
                other
            ))),
        }
    }
}

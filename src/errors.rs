use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Unknown animal type: {discriminator}")]
    UnrecognizedVariant { discriminator: String },

    #[error("Animal type `{0}` is already registered")]
    DuplicateVariant(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

impl FactoryError {
    pub fn unrecognized<S: Into<String>>(discriminator: S) -> Self {
        Self::UnrecognizedVariant {
            discriminator: discriminator.into(),
        }
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Returns the rejected discriminator if this is an unknown-variant error.
    pub fn discriminator(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedVariant { discriminator } => Some(discriminator),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for FactoryError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

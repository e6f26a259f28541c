use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryEvent {
    Created {
        discriminator: String,
        at: DateTime<Utc>,
    },

    Rejected {
        discriminator: String,
        at: DateTime<Utc>,
    },

    Released {
        discriminator: String,
        at: DateTime<Utc>,
    },
}

impl FactoryEvent {
    pub fn created<S: Into<String>>(discriminator: S) -> Self {
        Self::Created {
            discriminator: discriminator.into(),
            at: Utc::now(),
        }
    }

    pub fn rejected<S: Into<String>>(discriminator: S) -> Self {
        Self::Rejected {
            discriminator: discriminator.into(),
            at: Utc::now(),
        }
    }

    pub fn released<S: Into<String>>(discriminator: S) -> Self {
        Self::Released {
            discriminator: discriminator.into(),
            at: Utc::now(),
        }
    }

    pub fn discriminator(&self) -> &str {
        match self {
            Self::Created { discriminator, .. }
            | Self::Rejected { discriminator, .. }
            | Self::Released { discriminator, .. } => discriminator,
        }
    }
}

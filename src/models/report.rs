/// Result of running one discriminator through the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoOutcome {
    Spoke {
        discriminator: String,
        message: String,
    },

    Rejected {
        discriminator: String,
        reason: String,
    },
}

impl DemoOutcome {
    pub fn discriminator(&self) -> &str {
        match self {
            Self::Spoke { discriminator, .. } | Self::Rejected { discriminator, .. } => {
                discriminator
            }
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Ordered outcomes of a demo run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    outcomes: Vec<DemoOutcome>,
}

impl DemoReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: DemoOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[DemoOutcome] {
        &self.outcomes
    }

    /// Messages spoken, in script order.
    pub fn messages(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DemoOutcome::Spoke { message, .. } => Some(message.as_str()),
                DemoOutcome::Rejected { .. } => None,
            })
            .collect()
    }

    /// Discriminators the factory rejected, in script order.
    pub fn rejections(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.is_rejected())
            .map(DemoOutcome::discriminator)
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        !self.outcomes.iter().any(DemoOutcome::is_rejected)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

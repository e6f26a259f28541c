use crate::{
    DemoOutcome, DemoReport, FactoryError, FactoryEvent,
    factories::AnimalFactory,
    ports::{EventPublisher, Voice},
};
use tracing::{error, info};

/// Runs a script of discriminators through the factory.
///
/// Each created animal speaks once and is released before the next
/// discriminator is handled. Unknown discriminators are reported and
/// skipped; only event publishing failures abort the run.
pub struct DemoService<V, E>
where
    V: Voice,
    E: EventPublisher,
{
    factory: AnimalFactory,
    voice: V,
    events: E,
}

impl<V, E> DemoService<V, E>
where
    V: Voice,
    E: EventPublisher,
{
    pub fn new(factory: AnimalFactory, voice: V, events: E) -> Self {
        Self {
            factory,
            voice,
            events,
        }
    }

    pub fn run<I, S>(&mut self, script: I) -> Result<DemoReport, FactoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = DemoReport::new();

        for discriminator in script {
            let outcome = self.handle(discriminator.as_ref())?;
            report.push(outcome);
        }

        info!(
            handled = report.len(),
            rejected = report.rejections().len(),
            "demo finished"
        );
        Ok(report)
    }

    fn handle(&mut self, discriminator: &str) -> Result<DemoOutcome, FactoryError> {
        let animal = match self.factory.create(discriminator) {
            Ok(animal) => animal,
            Err(err @ FactoryError::UnrecognizedVariant { .. }) => {
                error!(discriminator, error = %err, "animal creation failed");
                self.events.publish(FactoryEvent::rejected(discriminator))?;
                return Ok(DemoOutcome::Rejected {
                    discriminator: discriminator.to_string(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        };
        self.events.publish(FactoryEvent::created(discriminator))?;

        animal.speak(&mut self.voice);
        let message = animal.sound().to_string();
        drop(animal);

        self.events.publish(FactoryEvent::released(discriminator))?;
        Ok(DemoOutcome::Spoke {
            discriminator: discriminator.to_string(),
            message,
        })
    }

    pub fn voice(&self) -> &V {
        &self.voice
    }

    pub fn into_voice(self) -> V {
        self.voice
    }

    pub fn events(&self) -> &E {
        &self.events
    }
}

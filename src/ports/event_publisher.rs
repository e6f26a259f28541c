use crate::FactoryError;
use crate::FactoryEvent;

pub trait EventPublisher {
    fn publish(&self, event: FactoryEvent) -> Result<(), FactoryError>;

    fn subscribe(&self, callback: Box<dyn Fn(&FactoryEvent)>) -> Result<String, FactoryError>;

    fn unsubscribe(&self, subscription_id: &str) -> Result<(), FactoryError>;

    /// Returns the most recent `limit` events (all when `None`), oldest first.
    fn event_history(&self, limit: Option<usize>) -> Result<Vec<FactoryEvent>, FactoryError>;

    fn clear_event_history(&self) -> Result<(), FactoryError>;
}

use crate::{FactoryError, FactoryEvent, ports::EventPublisher};
use std::cell::{Cell, RefCell};
use uuid::Uuid;

type Callback = Box<dyn Fn(&FactoryEvent)>;

/// Single-threaded publisher that keeps the full event history in memory.
#[derive(Default)]
pub struct InMemoryEventPublisher {
    history: RefCell<Vec<FactoryEvent>>,
    subscribers: RefCell<Vec<(String, Callback)>>,
    publishing: Cell<bool>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: FactoryEvent) -> Result<(), FactoryError> {
        if self.publishing.get() {
            return Err(FactoryError::EventError(
                "publish called from a subscriber".into(),
            ));
        }

        self.history.borrow_mut().push(event.clone());

        self.publishing.set(true);
        for (_, callback) in self.subscribers.borrow().iter() {
            callback(&event);
        }
        self.publishing.set(false);

        Ok(())
    }

    fn subscribe(&self, callback: Box<dyn Fn(&FactoryEvent)>) -> Result<String, FactoryError> {
        let id = Uuid::new_v4().to_string();
        self.subscribers
            .try_borrow_mut()
            .map_err(|_| FactoryError::EventError("subscribe called from a subscriber".into()))?
            .push((id.clone(), callback));
        Ok(id)
    }

    fn unsubscribe(&self, subscription_id: &str) -> Result<(), FactoryError> {
        let mut subscribers = self
            .subscribers
            .try_borrow_mut()
            .map_err(|_| FactoryError::EventError("unsubscribe called from a subscriber".into()))?;
        let before = subscribers.len();
        subscribers.retain(|(id, _)| id != subscription_id);

        if subscribers.len() == before {
            return Err(FactoryError::validation(format!(
                "Unknown subscription: {}",
                subscription_id
            )));
        }
        Ok(())
    }

    fn event_history(&self, limit: Option<usize>) -> Result<Vec<FactoryEvent>, FactoryError> {
        let history = self.history.borrow();
        let start = match limit {
            Some(limit) => history.len().saturating_sub(limit),
            None => 0,
        };
        Ok(history[start..].to_vec())
    }

    fn clear_event_history(&self) -> Result<(), FactoryError> {
        self.history.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_history_limit_keeps_most_recent() {
        let events = InMemoryEventPublisher::new();
        events.publish(FactoryEvent::created("dog")).unwrap();
        events.publish(FactoryEvent::released("dog")).unwrap();
        events.publish(FactoryEvent::rejected("lion")).unwrap();

        let recent = events.event_history(Some(2)).unwrap();
        assert_eq!(recent.len(), 2);
        assert!(matches!(recent[0], FactoryEvent::Released { .. }));
        assert_eq!(recent[1].discriminator(), "lion");

        assert_eq!(events.event_history(None).unwrap().len(), 3);
        assert_eq!(events.event_history(Some(10)).unwrap().len(), 3);

        events.clear_event_history().unwrap();
        assert!(events.event_history(None).unwrap().is_empty());
    }

    #[test]
    fn test_subscribers_receive_events() {
        let events = InMemoryEventPublisher::new();
        let seen = Rc::new(Cell::new(0));

        let counter = Rc::clone(&seen);
        let id = events
            .subscribe(Box::new(move |_| counter.set(counter.get() + 1)))
            .unwrap();

        events.publish(FactoryEvent::created("cat")).unwrap();
        assert_eq!(seen.get(), 1);

        events.unsubscribe(&id).unwrap();
        assert_eq!(events.subscriber_count(), 0);

        events.publish(FactoryEvent::released("cat")).unwrap();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_publish_from_subscriber_is_rejected() {
        let events = Rc::new(InMemoryEventPublisher::new());
        let nested: Rc<RefCell<Option<Result<(), FactoryError>>>> = Rc::default();

        let inner = Rc::downgrade(&events);
        let outcome = Rc::clone(&nested);
        events
            .subscribe(Box::new(move |event: &FactoryEvent| {
                if let (Some(inner), FactoryEvent::Created { .. }) = (inner.upgrade(), event) {
                    *outcome.borrow_mut() =
                        Some(inner.publish(FactoryEvent::released(event.discriminator())));
                }
            }))
            .unwrap();

        events.publish(FactoryEvent::created("dog")).unwrap();
        assert!(matches!(
            nested.borrow().as_ref(),
            Some(Err(FactoryError::EventError(_)))
        ));

        let history = events.event_history(None).unwrap();
        assert_eq!(history.len(), 1);
        assert!(matches!(history[0], FactoryEvent::Created { .. }));

        events.publish(FactoryEvent::released("dog")).unwrap();
        let history = events.event_history(None).unwrap();
        assert!(matches!(history[1], FactoryEvent::Released { .. }));
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let events = InMemoryEventPublisher::new();
        let result = events.unsubscribe("missing");
        assert!(matches!(result, Err(FactoryError::ValidationError(_))));
    }
}

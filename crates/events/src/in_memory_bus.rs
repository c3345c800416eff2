//! Process-local notification bus.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error)]
pub enum InMemoryBusError {
    #[error("subscriber list lock poisoned")]
    Poisoned,
}

/// Channel-per-subscriber bus. Subscriptions that were dropped are forgotten
/// on the next publish.
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    outboxes: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriptions known to the bus; dropped ones count until the next
    /// publish.
    pub fn subscriber_count(&self) -> usize {
        self.outboxes.lock().map(|o| o.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            outboxes: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<usize, Self::Error> {
        let mut outboxes = self.outboxes.lock().map_err(|_| InMemoryBusError::Poisoned)?;
        outboxes.retain(|tx| tx.send(message.clone()).is_ok());
        Ok(outboxes.len())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();
        // A poisoned bus still hands out a subscription; it stays silent.
        if let Ok(mut outboxes) = self.outboxes.lock() {
            outboxes.push(tx);
        }
        Subscription::new(rx)
    }
}

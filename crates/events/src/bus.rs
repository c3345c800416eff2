//! Notification fan-out seam.
//!
//! A store publishes; renderers subscribe and pull whatever has arrived since
//! they last looked. Delivery is in publish order per subscriber, and a
//! subscriber only sees what was published after it subscribed.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// Pull side of a subscription. Never blocks: a render loop polls it once per
/// frame.
///
/// ```ignore
/// let notifications = store.bus().subscribe();
/// // ... after a store call ...
/// for event in notifications.drain() {
///     toast(&event);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    inbox: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(inbox: Receiver<M>) -> Self {
        Self { inbox }
    }

    /// Oldest pending message, if any.
    pub fn try_next(&self) -> Option<M> {
        self.inbox.try_recv().ok()
    }

    /// Everything pending, oldest first.
    pub fn drain(&self) -> Vec<M> {
        self.inbox.try_iter().collect()
    }
}

/// Where a store sends its notifications.
///
/// `publish` reports how many subscribers received the message. A failed
/// publish never undoes the operation it describes; the store only logs it.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<usize, Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<usize, Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}

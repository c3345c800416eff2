//! Store notifications and the pub/sub plumbing that delivers them.
//!
//! The product store never talks to a UI directly. It publishes
//! [`StoreEvent`]s on an [`EventBus`]; whoever renders notifications or a
//! loading indicator subscribes and decides how to present them.

pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod store_event;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use store_event::{StoreEvent, StoreOperation};

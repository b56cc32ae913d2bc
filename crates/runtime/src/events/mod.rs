//! Cast notifications and their delivery.
//!
//! The engine emits [`CastEvent`]s through the [`PacketSink`] seam. The
//! bundled [`EventBus`] is a topic-based sink any number of consumers can
//! subscribe to.

mod bus;
mod sink;
mod types;

pub use bus::{EventBus, Topic};
pub use sink::PacketSink;
pub use types::{CastEvent, Delivery, Recipient};

//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use skill_core::ObjectId;
use tokio::sync::broadcast;

use super::sink::PacketSink;
use super::types::{CastEvent, Delivery, Recipient};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Notifications addressed to a single player
    Direct,
    /// Notifications broadcast to nearby observers
    Nearby,
}

impl Topic {
    pub fn of(recipient: &Recipient) -> Self {
        match recipient {
            Recipient::Player(_) => Self::Direct,
            Recipient::Near(_) => Self::Nearby,
        }
    }
}

/// Broadcast-channel [`PacketSink`].
///
/// Publishing never blocks; with no subscriber on a topic the delivery is
/// dropped. Slow subscribers lag and lose the oldest deliveries.
#[derive(Clone)]
pub struct EventBus {
    direct: broadcast::Sender<Delivery>,
    nearby: broadcast::Sender<Delivery>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            direct: broadcast::channel(capacity).0,
            nearby: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Delivery> {
        match topic {
            Topic::Direct => &self.direct,
            Topic::Nearby => &self.nearby,
        }
    }

    /// Publish a delivery to its corresponding topic
    pub fn publish(&self, delivery: Delivery) {
        let topic = Topic::of(&delivery.recipient);
        if self.sender(topic).send(delivery).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Delivery> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to both topics
    pub fn subscribe_all(&self) -> [broadcast::Receiver<Delivery>; 2] {
        [self.direct.subscribe(), self.nearby.subscribe()]
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketSink for EventBus {
    fn send_to_player(&self, player: ObjectId, event: &CastEvent) {
        self.publish(Delivery {
            recipient: Recipient::Player(player),
            event: event.clone(),
        });
    }

    fn broadcast_near(&self, source: ObjectId, event: &CastEvent) {
        self.publish(Delivery {
            recipient: Recipient::Near(source),
            event: event.clone(),
        });
    }
}

use skill_core::ObjectId;

use super::types::CastEvent;

/// Outbound notification seam.
///
/// The engine only decides when and to whom a notification goes. Encoding and
/// transport are up to the implementation, which must not block.
pub trait PacketSink: Send + Sync {
    /// Delivers `event` to one player's client.
    fn send_to_player(&self, player: ObjectId, event: &CastEvent);

    /// Delivers `event` to every observer near `source`.
    fn broadcast_near(&self, source: ObjectId, event: &CastEvent);
}

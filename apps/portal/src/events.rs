//! # Portal Events
//!
//! Change notification for observers. Every state mutation publishes an
//! event on a broadcast channel; views subscribe and re-read whatever
//! state they render. Events carry small summaries, never full state.
//!
//! Emission never blocks and never fails a mutation: a send with no
//! subscribers (or a lagging subscriber) is simply ignored.

use serde::Serialize;
use tokio::sync::broadcast;

/// Buffered events per subscriber before the oldest are dropped.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// The views a navigation event can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Login,
    Catalog,
    History,
    Success,
}

/// Events published by the portal state holders.
///
/// Serialized as tagged JSON for UI consumption:
/// ```json
/// { "type": "CartChanged", "payload": { "line_count": 2, "total_quantity": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum PortalEvent {
    /// The session was established or cleared.
    SessionChanged { authenticated: bool },

    /// The cart changed (quantity edit, clear, submit, reorder).
    CartChanged {
        line_count: usize,
        total_quantity: u64,
    },

    /// The order history changed (a submission prepended an order).
    HistoryChanged { order_count: usize },

    /// A workflow requests navigation (reorder → catalog, submit → success).
    NavigateTo(View),
}

/// Broadcast bus shared by all state holders.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<PortalEvent>,
}

impl EventBus {
    /// Creates a bus with the given per-subscriber capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        EventBus { tx }
    }

    /// Subscribes to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<PortalEvent> {
        self.tx.subscribe()
    }

    /// Publishes an event.
    ///
    /// An Err from the channel only means nobody is listening right now.
    pub fn emit(&self, event: PortalEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        EventBus::new(EVENT_CHANNEL_CAPACITY)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_receives_events() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.emit(PortalEvent::NavigateTo(View::Catalog));

        assert_eq!(rx.try_recv().unwrap(), PortalEvent::NavigateTo(View::Catalog));
    }

    #[test]
    fn test_emit_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.emit(PortalEvent::HistoryChanged { order_count: 3 });
    }

    #[test]
    fn test_events_serialize_tagged() {
        let json = serde_json::to_value(PortalEvent::CartChanged {
            line_count: 2,
            total_quantity: 3,
        })
        .unwrap();
        assert_eq!(json["type"], "CartChanged");
        assert_eq!(json["payload"]["line_count"], 2);
        assert_eq!(json["payload"]["total_quantity"], 3);
    }
}

//! # Event Bus System
//!
//! Decoupled communication between core modules using
//! `tokio::sync::broadcast`. The offline cache and the fingerprint engine
//! publish typed events; host UIs subscribe to drive badges, toasts, and
//! diagnostics without polling core state.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{CacheEvent, CoreEvent, EventBus};
//!
//! let event_bus = EventBus::new(100);
//! let mut subscriber = event_bus.subscribe();
//!
//! event_bus
//!     .emit(CoreEvent::Cache(CacheEvent::VideoCached {
//!         video_id: "v1".to_string(),
//!     }))
//!     .ok();
//! ```
//!
//! ## Error Handling
//!
//! - **`RecvError::Lagged(n)`**: subscriber was too slow and missed `n`
//!   events; non-fatal, the subscriber keeps receiving new events.
//! - **`RecvError::Closed`**: all senders dropped; treat as shutdown.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
///
/// Subscribers that fall behind by more than this receive
/// `RecvError::Lagged`.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

/// Top-level event enum encompassing all event categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum CoreEvent {
    /// Offline-cache events
    Cache(CacheEvent),
    /// Connectivity transitions
    Connectivity(ConnectivityEvent),
    /// Device fingerprint events
    Device(DeviceEvent),
}

impl CoreEvent {
    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            CoreEvent::Cache(e) => e.description(),
            CoreEvent::Connectivity(e) => e.description(),
            CoreEvent::Device(e) => e.description(),
        }
    }
}

/// Events published by the offline cache store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum CacheEvent {
    /// A video was added to the offline cache (or replaced in place).
    VideoCached {
        /// The video ID.
        video_id: String,
    },
    /// A video was removed from the offline cache.
    VideoRemoved {
        /// The video ID that was removed.
        video_id: String,
    },
    /// The entire cache was cleared.
    CacheCleared {
        /// Number of records removed.
        removed: usize,
    },
}

impl CacheEvent {
    fn description(&self) -> &str {
        match self {
            CacheEvent::VideoCached { .. } => "Video cached for offline playback",
            CacheEvent::VideoRemoved { .. } => "Video removed from offline cache",
            CacheEvent::CacheCleared { .. } => "Offline cache cleared",
        }
    }
}

/// Connectivity transitions observed by the offline cache store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum ConnectivityEvent {
    /// Host reports the network is reachable.
    Online,
    /// Host reports the network is unreachable.
    Offline,
}

impl ConnectivityEvent {
    fn description(&self) -> &str {
        match self {
            ConnectivityEvent::Online => "Connectivity restored",
            ConnectivityEvent::Offline => "Connectivity lost",
        }
    }
}

/// Events published by the fingerprint engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum DeviceEvent {
    /// A fingerprint digest was computed.
    FingerprintGenerated {
        /// The 64-character lowercase hex digest.
        fingerprint: String,
    },
}

impl DeviceEvent {
    fn description(&self) -> &str {
        match self {
            DeviceEvent::FingerprintGenerated { .. } => "Device fingerprint generated",
        }
    }
}

/// Central event bus for publishing and subscribing to events.
///
/// Uses `tokio::sync::broadcast` internally:
/// - multiple producers (clone the `EventBus`)
/// - multiple consumers (each `subscribe()` creates a new receiver)
/// - non-blocking sends (events are cloned per subscriber)
/// - lagging detection for slow subscribers
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer size.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an
    /// error if there are no active subscribers.
    pub fn emit(&self, event: CoreEvent) -> Result<usize, SendError<CoreEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber to receive events.
    ///
    /// Each call creates an independent receiver that will receive all
    /// future events; past events are not replayed.
    pub fn subscribe(&self) -> Receiver<CoreEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the client core and platform-specific
//! implementations. Each trait represents a capability that the core requires but
//! that must be implemented differently per platform (desktop, iOS, Android, web):
//!
//! - [`KeyValueStore`](storage::KeyValueStore) - Durable key-value storage for
//!   the offline video cache
//! - [`ConnectivityMonitor`](network::ConnectivityMonitor) - Online/offline
//!   detection plus change subscription
//! - [`DeviceSignals`](device::DeviceSignals) - Environmental signals consumed
//!   by the fingerprint engine
//! - [`NotificationPort`](notifications::NotificationPort) - Host notification
//!   permission and display
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//!
//! ## Fail-Fast Strategy
//!
//! The core fails fast with descriptive errors when a required capability is
//! missing: `core-runtime`'s config builder rejects construction rather than
//! degrading at call time.
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations should convert platform-specific errors to `BridgeError` and
//! provide actionable messages.
//!
//! ## Thread Safety
//!
//! On native targets all bridge traits require `Send + Sync` so adapters can be
//! shared across async tasks. WebAssembly builds relax those bounds through the
//! markers in [`platform`].

pub mod device;
pub mod error;
pub mod network;
pub mod notifications;
pub mod platform;
pub mod storage;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use device::{DeviceSignals, ScreenMetrics, WebGlInfo};
pub use network::{ConnectivityChangeStream, ConnectivityMonitor, ConnectivityState};
pub use notifications::{NotificationOptions, NotificationPermission, NotificationPort};
pub use storage::{KeyValueStore, MemoryKeyValueStore};
pub use time::{Clock, SystemClock};

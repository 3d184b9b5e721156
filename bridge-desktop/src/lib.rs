//! Desktop bridge implementations.
//!
//! Native adapters for the bridge traits, used by desktop hosts and by tests
//! that want real persistence without a browser environment:
//!
//! - [`SqliteKeyValueStore`] - durable key-value storage backed by SQLite
//! - [`DesktopConnectivityMonitor`] - socket-probe connectivity detection
//! - [`DesktopDeviceSignals`] - best-effort environmental signals
//! - [`TracingNotifier`] - notification port that logs instead of displaying

pub mod device;
pub mod kv_store;
pub mod network;
pub mod notifications;

pub use device::DesktopDeviceSignals;
pub use kv_store::SqliteKeyValueStore;
pub use network::DesktopConnectivityMonitor;
pub use notifications::TracingNotifier;

//! # Core Configuration Module
//!
//! Builder-pattern configuration for the client core. A `CoreConfig` holds
//! the bridge implementations every module needs, with fail-fast validation:
//! a missing required capability is rejected at build time with an
//! actionable message rather than surfacing as a runtime failure later.
//!
//! ## Required Dependencies
//!
//! - `KeyValueStore` - durable storage for the offline cache list
//! - `ConnectivityMonitor` - online/offline signal
//! - `DeviceSignals` - fingerprint signal source
//!
//! ## Optional Dependencies
//!
//! - `Clock` - defaults to the system clock
//! - `NotificationPort` - only needed by hosts that surface notifications
//!
//! When the `desktop-shims` feature is enabled, desktop defaults for
//! `ConnectivityMonitor`, `DeviceSignals`, and `NotificationPort` are
//! injected automatically if not provided. The key-value store is always
//! explicit because its location is a host decision.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .kv_store(Arc::new(my_store))
//!     .connectivity_monitor(Arc::new(my_monitor))
//!     .device_signals(Arc::new(my_signals))
//!     .build()?;
//! # Ok::<(), core_runtime::Error>(())
//! ```

use crate::error::{Error, Result};
use bridge_traits::{
    Clock, ConnectivityMonitor, DeviceSignals, KeyValueStore, NotificationPort, SystemClock,
};
use std::sync::Arc;

use crate::events::DEFAULT_EVENT_BUFFER_SIZE;

/// Core configuration for the client core.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Durable key-value storage (required)
    pub kv_store: Arc<dyn KeyValueStore>,

    /// Host connectivity signal (required)
    pub connectivity_monitor: Arc<dyn ConnectivityMonitor>,

    /// Environmental signal source for fingerprinting (required)
    pub device_signals: Arc<dyn DeviceSignals>,

    /// Time source (defaults to the system clock)
    pub clock: Arc<dyn Clock>,

    /// Host notification system (optional)
    pub notifications: Option<Arc<dyn NotificationPort>>,

    /// Event bus channel capacity
    pub event_buffer_size: usize,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("kv_store", &"KeyValueStore { ... }")
            .field("connectivity_monitor", &"ConnectivityMonitor { ... }")
            .field("device_signals", &"DeviceSignals { ... }")
            .field("clock", &"Clock { ... }")
            .field(
                "notifications",
                &self.notifications.as_ref().map(|_| "NotificationPort { ... }"),
            )
            .field("event_buffer_size", &self.event_buffer_size)
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

fn kv_store_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "KeyValueStore".to_string(),
        message: "KeyValueStore implementation is required for the offline cache. \
                 Desktop: inject bridge_desktop::SqliteKeyValueStore. \
                 Web: inject a localStorage-backed store. \
                 Mobile: inject platform preferences storage."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn connectivity_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "ConnectivityMonitor".to_string(),
        message: "ConnectivityMonitor implementation is required for online/offline tracking. \
                 Desktop: enable the 'desktop-shims' feature for the default probe-based monitor. \
                 Web: inject a navigator.onLine-backed monitor."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn device_signals_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "DeviceSignals".to_string(),
        message: "DeviceSignals implementation is required for device fingerprinting. \
                 Desktop: enable the 'desktop-shims' feature for best-effort native signals. \
                 Web: inject a navigator/screen-backed signal source."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_connectivity() -> Result<Arc<dyn ConnectivityMonitor>> {
    use bridge_desktop::DesktopConnectivityMonitor;

    Ok(Arc::new(DesktopConnectivityMonitor::new()))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_connectivity() -> Result<Arc<dyn ConnectivityMonitor>> {
    Err(connectivity_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_device_signals() -> Result<Arc<dyn DeviceSignals>> {
    use bridge_desktop::DesktopDeviceSignals;

    Ok(Arc::new(DesktopDeviceSignals::new(format!(
        "vclip-desktop/{}",
        env!("CARGO_PKG_VERSION")
    ))))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_device_signals() -> Result<Arc<dyn DeviceSignals>> {
    Err(device_signals_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_notifications() -> Option<Arc<dyn NotificationPort>> {
    use bridge_desktop::TracingNotifier;

    Some(Arc::new(TracingNotifier::new()))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_notifications() -> Option<Arc<dyn NotificationPort>> {
    None
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Default)]
pub struct CoreConfigBuilder {
    kv_store: Option<Arc<dyn KeyValueStore>>,
    connectivity_monitor: Option<Arc<dyn ConnectivityMonitor>>,
    device_signals: Option<Arc<dyn DeviceSignals>>,
    clock: Option<Arc<dyn Clock>>,
    notifications: Option<Arc<dyn NotificationPort>>,
    event_buffer_size: Option<usize>,
}

impl CoreConfigBuilder {
    /// Sets the key-value store implementation (required).
    pub fn kv_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.kv_store = Some(store);
        self
    }

    /// Sets the connectivity monitor implementation.
    pub fn connectivity_monitor(mut self, monitor: Arc<dyn ConnectivityMonitor>) -> Self {
        self.connectivity_monitor = Some(monitor);
        self
    }

    /// Sets the device signal source.
    pub fn device_signals(mut self, signals: Arc<dyn DeviceSignals>) -> Self {
        self.device_signals = Some(signals);
        self
    }

    /// Sets the time source. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sets the notification port.
    pub fn notifications(mut self, port: Arc<dyn NotificationPort>) -> Self {
        self.notifications = Some(port);
        self
    }

    /// Sets the event bus channel capacity.
    ///
    /// Default: [`DEFAULT_EVENT_BUFFER_SIZE`]
    pub fn event_buffer_size(mut self, capacity: usize) -> Self {
        self.event_buffer_size = Some(capacity);
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// Returns an error with an actionable message if a required capability
    /// is missing or a value is invalid.
    pub fn build(self) -> Result<CoreConfig> {
        let kv_store = self.kv_store.ok_or_else(kv_store_missing_error)?;

        let connectivity_monitor = match self.connectivity_monitor {
            Some(monitor) => monitor,
            None => provide_default_connectivity()?,
        };

        let device_signals = match self.device_signals {
            Some(signals) => signals,
            None => provide_default_device_signals()?,
        };

        let notifications = self.notifications.or_else(provide_default_notifications);

        let event_buffer_size = self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE);
        if event_buffer_size == 0 {
            return Err(Error::Config(
                "Event buffer size must be greater than 0".to_string(),
            ));
        }

        Ok(CoreConfig {
            kv_store,
            connectivity_monitor,
            device_signals,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            notifications,
            event_buffer_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::{
        device::{ScreenMetrics, WebGlInfo},
        error::BridgeError,
        network::{ConnectivityChangeStream, ConnectivityState},
        MemoryKeyValueStore,
    };

    struct MockConnectivity;

    #[async_trait]
    impl ConnectivityMonitor for MockConnectivity {
        async fn is_online(&self) -> std::result::Result<bool, BridgeError> {
            Ok(true)
        }

        async fn subscribe_changes(
            &self,
        ) -> std::result::Result<Box<dyn ConnectivityChangeStream>, BridgeError> {
            Ok(Box::new(ClosedStream))
        }
    }

    struct ClosedStream;

    #[async_trait]
    impl ConnectivityChangeStream for ClosedStream {
        async fn next(&mut self) -> Option<ConnectivityState> {
            None
        }
    }

    struct MockSignals;

    #[async_trait]
    impl DeviceSignals for MockSignals {
        fn screen_metrics(&self) -> ScreenMetrics {
            ScreenMetrics::new(375, 812, 32)
        }

        fn timezone(&self) -> String {
            "Asia/Ho_Chi_Minh".to_string()
        }

        fn language(&self) -> String {
            "en-US".to_string()
        }

        fn platform(&self) -> String {
            "iPhone".to_string()
        }

        fn user_agent(&self) -> String {
            "test-agent".to_string()
        }

        async fn canvas_fingerprint(&self) -> std::result::Result<String, BridgeError> {
            Ok("data:image/png;base64,TEST".to_string())
        }

        async fn webgl_info(&self) -> std::result::Result<WebGlInfo, BridgeError> {
            Ok(WebGlInfo {
                vendor: "Apple".to_string(),
                renderer: "Apple GPU".to_string(),
            })
        }
    }

    #[test]
    fn test_builder_requires_kv_store() {
        let result = CoreConfig::builder()
            .connectivity_monitor(Arc::new(MockConnectivity))
            .device_signals(Arc::new(MockSignals))
            .build();

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("KeyValueStore"));
        assert!(err_msg.contains("offline cache"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_connectivity_without_shims() {
        let result = CoreConfig::builder()
            .kv_store(Arc::new(MemoryKeyValueStore::new()))
            .device_signals(Arc::new(MockSignals))
            .build();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ConnectivityMonitor"));
    }

    #[test]
    fn test_builder_with_all_required_fields() {
        let config = CoreConfig::builder()
            .kv_store(Arc::new(MemoryKeyValueStore::new()))
            .connectivity_monitor(Arc::new(MockConnectivity))
            .device_signals(Arc::new(MockSignals))
            .build()
            .unwrap();

        assert_eq!(config.event_buffer_size, DEFAULT_EVENT_BUFFER_SIZE);
    }

    #[test]
    fn test_builder_rejects_zero_event_buffer() {
        let result = CoreConfig::builder()
            .kv_store(Arc::new(MemoryKeyValueStore::new()))
            .connectivity_monitor(Arc::new(MockConnectivity))
            .device_signals(Arc::new(MockSignals))
            .event_buffer_size(0)
            .build();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must be greater than 0"));
    }

    #[test]
    fn test_config_is_cloneable() {
        let config = CoreConfig::builder()
            .kv_store(Arc::new(MemoryKeyValueStore::new()))
            .connectivity_monitor(Arc::new(MockConnectivity))
            .device_signals(Arc::new(MockSignals))
            .event_buffer_size(16)
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.event_buffer_size, 16);
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_desktop_shims_provide_defaults() {
        let config = CoreConfig::builder()
            .kv_store(Arc::new(MemoryKeyValueStore::new()))
            .build()
            .expect("desktop defaults should fill the gaps");

        assert!(config.notifications.is_some());
    }
}

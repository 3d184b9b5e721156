//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (key-value storage,
//! connectivity, device signals, clock, notifications) into the client core
//! and exposes a single [`ClientCore`] handle. Desktop apps typically enable
//! the `desktop-shims` feature (which fills in probe-based connectivity,
//! native device signals, and a logging notifier), whereas web and mobile
//! hosts inject their own bridges through
//! [`CoreConfig`](core_runtime::config::CoreConfig).

pub mod error;

pub use error::{CoreError, Result};

use std::sync::Arc;

use bridge_traits::NotificationPort;
use core_fingerprint::FingerprintEngine;
use core_offline::OfflineCacheStore;
use core_runtime::{
    config::CoreConfig,
    events::{CoreEvent, EventBus},
};
use tracing::info;

/// Primary façade exposed to host applications.
///
/// Owns the offline cache store, the fingerprint engine, and the event bus
/// they publish on. Cheap to clone; clones share the same underlying state.
#[derive(Clone)]
pub struct ClientCore {
    offline: Arc<OfflineCacheStore>,
    fingerprint: Arc<FingerprintEngine>,
    notifications: Option<Arc<dyn NotificationPort>>,
    events: EventBus,
}

impl ClientCore {
    /// Assemble the core from a validated configuration.
    ///
    /// The offline cache store stays inert until [`start`](Self::start) is
    /// called; the fingerprint engine is usable immediately.
    pub fn new(config: CoreConfig) -> Self {
        let events = EventBus::new(config.event_buffer_size);

        let offline = OfflineCacheStore::new(
            Arc::clone(&config.kv_store),
            Arc::clone(&config.connectivity_monitor),
            Arc::clone(&config.clock),
        )
        .with_event_bus(events.clone());

        let fingerprint = FingerprintEngine::new(Arc::clone(&config.device_signals))
            .with_event_bus(events.clone());

        Self {
            offline: Arc::new(offline),
            fingerprint: Arc::new(fingerprint),
            notifications: config.notifications,
            events,
        }
    }

    /// Load persisted state and begin tracking connectivity.
    pub async fn start(&self) -> Result<()> {
        self.offline.start().await?;
        info!("Client core started");
        Ok(())
    }

    /// Stop background work. State remains readable afterwards.
    pub fn shutdown(&self) {
        self.offline.stop();
        info!("Client core shut down");
    }

    /// The offline video cache.
    pub fn offline_cache(&self) -> &OfflineCacheStore {
        &self.offline
    }

    /// The device fingerprint engine.
    pub fn fingerprint(&self) -> &FingerprintEngine {
        &self.fingerprint
    }

    /// Host notification system, when one was configured.
    pub fn notifications(&self) -> Option<Arc<dyn NotificationPort>> {
        self.notifications.clone()
    }

    /// Subscribe to cache, connectivity, and device events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<CoreEvent> {
        self.events.subscribe()
    }
}

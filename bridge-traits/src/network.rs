//! Connectivity Abstraction
//!
//! Provides the host connectivity signal consumed by the offline cache: a
//! boolean "online" query at startup plus a subscription for transition
//! events.

use crate::{
    error::Result,
    platform::{PlatformSend, PlatformSendSync},
};

/// Host connectivity state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    /// Network is reachable
    Online,
    /// Network is not reachable
    Offline,
}

impl ConnectivityState {
    pub fn is_online(self) -> bool {
        matches!(self, ConnectivityState::Online)
    }

    pub fn from_online(online: bool) -> Self {
        if online {
            ConnectivityState::Online
        } else {
            ConnectivityState::Offline
        }
    }
}

/// Connectivity monitor trait
///
/// # Platform Support
///
/// - **Desktop**: socket probe or system network APIs
/// - **iOS**: Network framework, Reachability
/// - **Android**: ConnectivityManager
/// - **Web**: `navigator.onLine` + online/offline window events
///
/// # Example
///
/// ```ignore
/// use bridge_traits::network::ConnectivityMonitor;
///
/// async fn startup_state(monitor: &dyn ConnectivityMonitor) -> bool {
///     monitor.is_online().await.unwrap_or(false)
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ConnectivityMonitor: PlatformSendSync {
    /// Query current connectivity.
    async fn is_online(&self) -> Result<bool>;

    /// Subscribe to connectivity transitions.
    ///
    /// Implementations should emit a state only when it differs from the
    /// previously observed one; consumers treat repeated states as no-ops.
    async fn subscribe_changes(&self) -> Result<Box<dyn ConnectivityChangeStream>>;
}

/// Stream of connectivity transitions
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ConnectivityChangeStream: PlatformSend {
    /// Get the next connectivity transition.
    ///
    /// Returns `None` when the stream is closed.
    async fn next(&mut self) -> Option<ConnectivityState>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectivity_state() {
        assert!(ConnectivityState::Online.is_online());
        assert!(!ConnectivityState::Offline.is_online());
        assert_eq!(
            ConnectivityState::from_online(true),
            ConnectivityState::Online
        );
        assert_eq!(
            ConnectivityState::from_online(false),
            ConnectivityState::Offline
        );
    }
}

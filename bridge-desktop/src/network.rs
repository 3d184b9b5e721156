//! Connectivity Monitoring Implementation

use async_trait::async_trait;
use bridge_traits::{
    error::Result,
    network::{ConnectivityChangeStream, ConnectivityMonitor, ConnectivityState},
};
use std::time::Duration;
use tracing::debug;

const PROBE_ADDR: &str = "8.8.8.8:53";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Desktop connectivity monitor implementation
///
/// Detects connectivity by probing a well-known endpoint. Platform-specific
/// implementations (Linux netlink, macOS SystemConfiguration, Windows WinAPI)
/// would be more robust but require additional dependencies.
pub struct DesktopConnectivityMonitor {
    poll_interval: Duration,
}

impl DesktopConnectivityMonitor {
    pub fn new() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Override the change-stream polling interval (mainly for tests).
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    async fn probe() -> ConnectivityState {
        match tokio::time::timeout(PROBE_TIMEOUT, tokio::net::TcpStream::connect(PROBE_ADDR)).await
        {
            Ok(Ok(_)) => ConnectivityState::Online,
            Ok(Err(_)) | Err(_) => ConnectivityState::Offline,
        }
    }
}

impl Default for DesktopConnectivityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectivityMonitor for DesktopConnectivityMonitor {
    async fn is_online(&self) -> Result<bool> {
        let state = Self::probe().await;
        debug!(state = ?state, "Connectivity probe");
        Ok(state.is_online())
    }

    async fn subscribe_changes(&self) -> Result<Box<dyn ConnectivityChangeStream>> {
        Ok(Box::new(PollingChangeStream {
            poll_interval: self.poll_interval,
            last_state: None,
        }))
    }
}

/// Change stream that polls the probe endpoint and emits on state flips
struct PollingChangeStream {
    poll_interval: Duration,
    last_state: Option<ConnectivityState>,
}

#[async_trait]
impl ConnectivityChangeStream for PollingChangeStream {
    async fn next(&mut self) -> Option<ConnectivityState> {
        loop {
            tokio::time::sleep(self.poll_interval).await;

            let state = DesktopConnectivityMonitor::probe().await;
            if self.last_state != Some(state) {
                self.last_state = Some(state);
                return Some(state);
            }
        }
    }
}

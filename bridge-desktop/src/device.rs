//! Device Signals Implementation
//!
//! Best-effort environmental signals for native hosts. Desktop processes have
//! no canvas or WebGL context, so those reads report `NotAvailable` and the
//! fingerprint engine folds in its sentinel strings instead.

use async_trait::async_trait;
use bridge_traits::{
    device::{DeviceSignals, ScreenMetrics, WebGlInfo},
    error::{BridgeError, Result},
};

/// Desktop device signal source
///
/// Screen metrics cannot be probed without a windowing dependency, so hosts
/// that know their display should set them via
/// [`with_screen_metrics`](Self::with_screen_metrics); otherwise a zeroed
/// placeholder is reported, which is stable across runs on the same host.
pub struct DesktopDeviceSignals {
    user_agent: String,
    screen: ScreenMetrics,
}

impl DesktopDeviceSignals {
    /// Create a signal source identifying the embedding application.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            screen: ScreenMetrics::new(0, 0, 0),
        }
    }

    pub fn with_screen_metrics(mut self, screen: ScreenMetrics) -> Self {
        self.screen = screen;
        self
    }
}

#[async_trait]
impl DeviceSignals for DesktopDeviceSignals {
    fn screen_metrics(&self) -> ScreenMetrics {
        self.screen
    }

    fn timezone(&self) -> String {
        std::env::var("TZ").unwrap_or_else(|_| "Etc/UTC".to_string())
    }

    fn language(&self) -> String {
        std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .ok()
            .and_then(|lang| lang.split('.').next().map(str::to_string))
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| "en-US".to_string())
    }

    fn platform(&self) -> String {
        format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    async fn canvas_fingerprint(&self) -> Result<String> {
        Err(BridgeError::NotAvailable(
            "no 2D canvas surface on desktop hosts".to_string(),
        ))
    }

    async fn webgl_info(&self) -> Result<WebGlInfo> {
        Err(BridgeError::NotAvailable(
            "no WebGL debug extension on desktop hosts".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_infallible_signals_are_nonempty() {
        let signals = DesktopDeviceSignals::new("vclip-desktop/0.1");

        assert!(!signals.timezone().is_empty());
        assert!(!signals.language().is_empty());
        assert!(!signals.platform().is_empty());
        assert_eq!(signals.user_agent(), "vclip-desktop/0.1");
    }

    #[tokio::test]
    async fn test_graphics_signals_unavailable() {
        let signals = DesktopDeviceSignals::new("vclip-desktop/0.1");

        assert!(signals.canvas_fingerprint().await.is_err());
        assert!(signals.webgl_info().await.is_err());
    }

    #[test]
    fn test_screen_metrics_override() {
        let signals = DesktopDeviceSignals::new("ua")
            .with_screen_metrics(ScreenMetrics::new(2560, 1440, 30));
        assert_eq!(signals.screen_metrics().signal(), "2560x1440x30");
    }
}

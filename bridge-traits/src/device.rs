//! Device Signal Abstraction
//!
//! Exposes the environmental signals the fingerprint engine hashes. Signals
//! that every host can report (screen metrics, timezone, language, platform,
//! user agent) are infallible; the rendered-canvas raster and the WebGL debug
//! info can be missing or throw on some hosts and are therefore fallible, so
//! the engine can substitute its sentinel strings.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Screen dimensions and color depth as reported by the host display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
}

impl ScreenMetrics {
    pub fn new(width: u32, height: u32, color_depth: u32) -> Self {
        Self {
            width,
            height,
            color_depth,
        }
    }

    /// Render the metrics as the fingerprint signal string, e.g. `1920x1080x24`.
    pub fn signal(&self) -> String {
        format!("{}x{}x{}", self.width, self.height, self.color_depth)
    }
}

/// GPU vendor and renderer strings from the accelerated-graphics debug
/// extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebGlInfo {
    pub vendor: String,
    pub renderer: String,
}

/// Environmental signal source trait
///
/// # Platform Support
///
/// - **Web**: `screen`, `Intl.DateTimeFormat`, `navigator`, offscreen canvas,
///   `WEBGL_debug_renderer_info`
/// - **Desktop**: best-effort values from the OS (see `bridge-desktop`);
///   canvas/WebGL are unavailable and report errors
///
/// # Example
///
/// ```ignore
/// use bridge_traits::device::DeviceSignals;
///
/// fn locale_signals(signals: &dyn DeviceSignals) -> (String, String) {
///     (signals.timezone(), signals.language())
/// }
/// ```
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait DeviceSignals: PlatformSendSync {
    /// Screen width, height, and color depth.
    fn screen_metrics(&self) -> ScreenMetrics;

    /// Resolved IANA timezone name, e.g. `Asia/Ho_Chi_Minh`.
    fn timezone(&self) -> String;

    /// Negotiated UI language, e.g. `en-US`.
    fn language(&self) -> String;

    /// Reported platform identifier, e.g. `MacIntel`.
    fn platform(&self) -> String;

    /// Full user-agent string.
    fn user_agent(&self) -> String;

    /// Render fixed text into an offscreen 2D surface and serialize the
    /// bitmap to a data string.
    ///
    /// Errors when the host cannot produce a 2D surface.
    async fn canvas_fingerprint(&self) -> Result<String>;

    /// GPU vendor and renderer strings from the graphics debug extension.
    ///
    /// Errors when the graphics context or the debug extension is
    /// unavailable.
    async fn webgl_info(&self) -> Result<WebGlInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_metrics_signal() {
        let metrics = ScreenMetrics::new(1920, 1080, 24);
        assert_eq!(metrics.signal(), "1920x1080x24");
    }

    #[test]
    fn test_webgl_info_clone() {
        let info = WebGlInfo {
            vendor: "Google Inc.".to_string(),
            renderer: "ANGLE (Apple M1)".to_string(),
        };
        assert_eq!(info.clone(), info);
    }
}

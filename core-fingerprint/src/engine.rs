//! Fingerprint derivation over injected device signals.

use bridge_traits::DeviceSignals;
use core_runtime::events::{CoreEvent, DeviceEvent, EventBus};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Substituted when the host cannot produce the rendered-text raster signal.
pub const CANVAS_ERROR_SENTINEL: &str = "canvas-error";

/// Substituted when the GPU vendor/renderer lookup fails.
pub const WEBGL_ERROR_SENTINEL: &str = "webgl-error";

/// Derives device fingerprints from environmental signals.
///
/// The digest is SHA-256 over the `|`-joined signal strings, rendered as
/// lowercase hex. Given identical signal values the digest is identical, so
/// the same device hashes to the same identifier across sessions without any
/// stored state.
pub struct FingerprintEngine {
    signals: Arc<dyn DeviceSignals>,
    events: Option<EventBus>,
}

impl FingerprintEngine {
    pub fn new(signals: Arc<dyn DeviceSignals>) -> Self {
        Self {
            signals,
            events: None,
        }
    }

    /// Attach an event bus; each generated fingerprint is announced on it.
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Generate the fingerprint digest for the current environment.
    ///
    /// Collects, in order: screen metrics, timezone, language, platform,
    /// user agent, the canvas raster (or [`CANVAS_ERROR_SENTINEL`]), and the
    /// GPU vendor and renderer (or a single [`WEBGL_ERROR_SENTINEL`] entry
    /// when the lookup fails, in which case the renderer entry is omitted).
    ///
    /// Per-signal failures never abort the computation; this always yields
    /// a 64-character lowercase hex string.
    #[instrument(skip(self))]
    pub async fn generate(&self) -> String {
        let mut parts: Vec<String> = vec![
            self.signals.screen_metrics().signal(),
            self.signals.timezone(),
            self.signals.language(),
            self.signals.platform(),
            self.signals.user_agent(),
        ];

        match self.signals.canvas_fingerprint().await {
            Ok(raster) => parts.push(raster),
            Err(e) => {
                warn!(error = %e, "Canvas signal unavailable, using sentinel");
                parts.push(CANVAS_ERROR_SENTINEL.to_string());
            }
        }

        match self.signals.webgl_info().await {
            Ok(info) => {
                parts.push(info.vendor);
                parts.push(info.renderer);
            }
            Err(e) => {
                warn!(error = %e, "WebGL signal unavailable, using sentinel");
                parts.push(WEBGL_ERROR_SENTINEL.to_string());
            }
        }

        let joined = parts.join("|");
        let fingerprint = hex::encode(Sha256::digest(joined.as_bytes()));
        debug!(%fingerprint, "Fingerprint generated");

        if let Some(bus) = &self.events {
            bus.emit(CoreEvent::Device(DeviceEvent::FingerprintGenerated {
                fingerprint: fingerprint.clone(),
            }))
            .ok();
        }

        fingerprint
    }
}

/// Whether `fingerprint` has never been observed before.
///
/// Returns `true` exactly when `fingerprint` is not a member of `known`.
/// No further heuristics are applied.
pub fn detect_suspicious_activity(fingerprint: &str, known: &HashSet<String>) -> bool {
    !known.contains(fingerprint)
}

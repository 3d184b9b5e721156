//! Tests for fingerprint derivation and the novelty check.

use async_trait::async_trait;
use bridge_traits::{
    device::{DeviceSignals, ScreenMetrics, WebGlInfo},
    error::Result as BridgeResult,
    BridgeError,
};
use core_fingerprint::{detect_suspicious_activity, FingerprintEngine};
use core_runtime::events::{CoreEvent, DeviceEvent, EventBus};
use std::collections::HashSet;
use std::sync::Arc;

/// Signal source with fully scripted values.
#[derive(Clone)]
struct FixedSignals {
    screen: ScreenMetrics,
    timezone: String,
    language: String,
    platform: String,
    user_agent: String,
    canvas: Option<String>,
    webgl: Option<WebGlInfo>,
}

impl FixedSignals {
    fn baseline() -> Self {
        Self {
            screen: ScreenMetrics::new(1920, 1080, 24),
            timezone: "Asia/Ho_Chi_Minh".to_string(),
            language: "en-US".to_string(),
            platform: "MacIntel".to_string(),
            user_agent: "Mozilla/5.0 (test)".to_string(),
            canvas: Some("data:image/png;base64,AAAA".to_string()),
            webgl: Some(WebGlInfo {
                vendor: "Google Inc.".to_string(),
                renderer: "ANGLE (Apple M1)".to_string(),
            }),
        }
    }
}

#[async_trait]
impl DeviceSignals for FixedSignals {
    fn screen_metrics(&self) -> ScreenMetrics {
        self.screen
    }

    fn timezone(&self) -> String {
        self.timezone.clone()
    }

    fn language(&self) -> String {
        self.language.clone()
    }

    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    async fn canvas_fingerprint(&self) -> BridgeResult<String> {
        self.canvas
            .clone()
            .ok_or_else(|| BridgeError::NotAvailable("no 2D surface".to_string()))
    }

    async fn webgl_info(&self) -> BridgeResult<WebGlInfo> {
        self.webgl
            .clone()
            .ok_or_else(|| BridgeError::NotAvailable("no debug extension".to_string()))
    }
}

fn engine(signals: FixedSignals) -> FingerprintEngine {
    FingerprintEngine::new(Arc::new(signals))
}

fn assert_hex_digest(s: &str) {
    assert_eq!(s.len(), 64);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[tokio::test]
async fn test_identical_signals_yield_identical_digest() {
    let a = engine(FixedSignals::baseline()).generate().await;
    let b = engine(FixedSignals::baseline()).generate().await;
    assert_eq!(a, b);
    assert_hex_digest(&a);
}

#[tokio::test]
async fn test_single_changed_signal_changes_digest() {
    let baseline = engine(FixedSignals::baseline()).generate().await;

    let mut shifted = FixedSignals::baseline();
    shifted.timezone = "Europe/Berlin".to_string();
    assert_ne!(engine(shifted).generate().await, baseline);

    let mut resized = FixedSignals::baseline();
    resized.screen = ScreenMetrics::new(1280, 800, 24);
    assert_ne!(engine(resized).generate().await, baseline);
}

#[tokio::test]
async fn test_graphics_failures_still_resolve() {
    let mut degraded = FixedSignals::baseline();
    degraded.canvas = None;
    degraded.webgl = None;

    let digest = engine(degraded.clone()).generate().await;
    assert_hex_digest(&digest);

    // Deterministic: the sentinels hash the same way every time.
    assert_eq!(engine(degraded).generate().await, digest);

    // And differently from the fully-available environment.
    assert_ne!(engine(FixedSignals::baseline()).generate().await, digest);
}

#[tokio::test]
async fn test_sentinel_digest_matches_known_vector() {
    // SHA-256 of
    // "1920x1080x24|Asia/Ho_Chi_Minh|en-US|MacIntel|Mozilla/5.0 (test)|canvas-error|webgl-error"
    // pinning join order, the `|` separator, and both sentinel literals.
    let mut degraded = FixedSignals::baseline();
    degraded.canvas = None;
    degraded.webgl = None;

    assert_eq!(
        engine(degraded).generate().await,
        "8331e20201d22d0ae028a9abd50ee470c3ffb5eb3f312c3f9f27f2cb8812d490"
    );
}

#[tokio::test]
async fn test_canvas_failure_alone_changes_digest() {
    let baseline = engine(FixedSignals::baseline()).generate().await;

    let mut no_canvas = FixedSignals::baseline();
    no_canvas.canvas = None;
    assert_ne!(engine(no_canvas).generate().await, baseline);
}

#[tokio::test]
async fn test_generate_emits_device_event() {
    let bus = EventBus::new(8);
    let mut sub = bus.subscribe();

    let engine = FingerprintEngine::new(Arc::new(FixedSignals::baseline())).with_event_bus(bus);
    let digest = engine.generate().await;

    assert_eq!(
        sub.recv().await.unwrap(),
        CoreEvent::Device(DeviceEvent::FingerprintGenerated {
            fingerprint: digest
        })
    );
}

#[test]
fn test_suspicious_activity_is_set_non_membership() {
    let mut known = HashSet::new();
    known.insert("aaa".to_string());
    known.insert("bbb".to_string());

    assert!(!detect_suspicious_activity("aaa", &known));
    assert!(detect_suspicious_activity("ccc", &known));

    // Everything is novel against an empty set.
    assert!(detect_suspicious_activity("aaa", &HashSet::new()));
}

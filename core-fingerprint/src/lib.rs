//! # Device Fingerprinting
//!
//! Derives a stable identifier for the current device/browser environment
//! from a fixed, ordered set of signals, and classifies whether a given
//! identifier has been seen before.
//!
//! The [`FingerprintEngine`] collects signals through the host's
//! [`DeviceSignals`](bridge_traits::DeviceSignals) port, so the digest is
//! deterministic in tests and on hosts without a real display. Graphics
//! signals that cannot be collected are replaced by fixed sentinel strings
//! rather than failing the whole computation.

pub mod engine;

pub use engine::{
    detect_suspicious_activity, FingerprintEngine, CANVAS_ERROR_SENTINEL, WEBGL_ERROR_SENTINEL,
};

//! # Core Runtime
//!
//! Shared runtime infrastructure for the client core:
//!
//! - [`config`] - `CoreConfig` builder injecting host bridge implementations
//!   with fail-fast validation
//! - [`error`] - runtime error type
//! - [`events`] - typed event bus for decoupled module communication
//! - [`logging`] - `tracing` subscriber initialization

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{Error, Result};
pub use events::{CacheEvent, ConnectivityEvent, CoreEvent, DeviceEvent, EventBus};
pub use logging::{init_logging, LogFormat, LoggingConfig};

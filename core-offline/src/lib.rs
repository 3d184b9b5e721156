//! # Offline Video Cache
//!
//! Single source of truth for which videos are available without network
//! access, and for current connectivity status.
//!
//! ## Overview
//!
//! The [`OfflineCacheStore`] keeps an insertion-ordered list of
//! [`CachedVideo`] records in memory and mirrors every mutation to durable
//! key-value storage, so the list survives restarts. Connectivity is tracked
//! through the host's [`ConnectivityMonitor`](bridge_traits::ConnectivityMonitor)
//! and exposed as a plain boolean; cached videos stay available regardless of
//! connectivity.
//!
//! The cache has no eviction, TTL, or size cap: records live until the
//! caller removes them or clears the cache.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_offline::{OfflineCacheStore, VideoMeta};
//!
//! # async fn example(store: &OfflineCacheStore) -> Result<(), core_offline::OfflineError> {
//! store.cache_video(VideoMeta {
//!     id: "v1".into(),
//!     video_url: "https://cdn.example/v1.mp4".into(),
//!     thumbnail_url: "https://cdn.example/v1.jpg".into(),
//!     caption: "hello".into(),
//! })
//! .await?;
//!
//! if !store.is_online() {
//!     let available = store.cached_videos().await;
//!     println!("{} videos available offline", available.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod store;

pub use error::OfflineError;
pub use model::{CachedVideo, VideoMeta};
pub use store::{OfflineCacheStore, CACHE_STORAGE_KEY};

//! # Offline Cache Store
//!
//! Orchestrates the persisted video list and the connectivity flag over the
//! injected bridge ports.
//!
//! Every mutating call persists the full resulting list before the in-memory
//! state is updated, so a failed storage write leaves the observable state
//! unchanged. Connectivity transitions arrive on a background listener task
//! started by [`OfflineCacheStore::start`] and only flip a boolean; they
//! never touch the cached list.

use crate::error::{OfflineError, Result};
use crate::model::{CachedVideo, VideoMeta};
use bridge_traits::{Clock, ConnectivityMonitor, KeyValueStore};
use core_runtime::events::{CacheEvent, ConnectivityEvent, CoreEvent, EventBus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Storage key holding the JSON-serialized video list.
pub const CACHE_STORAGE_KEY: &str = "cached_videos";

/// Offline cache store.
///
/// Holds the insertion-ordered video list, mirrors it to durable storage,
/// and tracks host connectivity for the lifetime between [`start`] and
/// [`stop`].
///
/// [`start`]: OfflineCacheStore::start
/// [`stop`]: OfflineCacheStore::stop
pub struct OfflineCacheStore {
    kv: Arc<dyn KeyValueStore>,
    connectivity: Arc<dyn ConnectivityMonitor>,
    clock: Arc<dyn Clock>,
    events: Option<EventBus>,
    videos: RwLock<Vec<CachedVideo>>,
    online: Arc<AtomicBool>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl OfflineCacheStore {
    /// Create a new store over the given ports.
    ///
    /// The store is inert until [`start`](Self::start) is called.
    pub fn new(
        kv: Arc<dyn KeyValueStore>,
        connectivity: Arc<dyn ConnectivityMonitor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            kv,
            connectivity,
            clock,
            events: None,
            videos: RwLock::new(Vec::new()),
            online: Arc::new(AtomicBool::new(false)),
            listener: Mutex::new(None),
        }
    }

    /// Attach an event bus for cache and connectivity events.
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Initialize the store: load the persisted list, read current
    /// connectivity, and subscribe to connectivity transitions.
    ///
    /// If the persisted list does not parse, the store starts with an empty
    /// in-memory list and returns [`OfflineError::StorageCorrupt`] so the
    /// host can decide whether to clear storage or abort; the corrupt value
    /// is left in place.
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<()> {
        let mut corrupt: Option<serde_json::Error> = None;

        let loaded: Vec<CachedVideo> = match self.kv.get(CACHE_STORAGE_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(list) => list,
                Err(e) => {
                    warn!(error = %e, "Persisted cache list is corrupt, starting empty");
                    corrupt = Some(e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let count = loaded.len();
        *self.videos.write().await = loaded;

        let online = self.connectivity.is_online().await.unwrap_or(false);
        self.online.store(online, Ordering::SeqCst);

        let mut stream = self.connectivity.subscribe_changes().await?;
        let flag = Arc::clone(&self.online);
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            while let Some(state) = stream.next().await {
                let now_online = state.is_online();
                let was_online = flag.swap(now_online, Ordering::SeqCst);
                if was_online == now_online {
                    continue;
                }
                debug!(online = now_online, "Connectivity changed");
                if let Some(bus) = &events {
                    let event = if now_online {
                        ConnectivityEvent::Online
                    } else {
                        ConnectivityEvent::Offline
                    };
                    bus.emit(CoreEvent::Connectivity(event)).ok();
                }
            }
        });

        if let Some(old) = self.listener.lock().unwrap().replace(handle) {
            old.abort();
        }

        info!(videos = count, online, "Offline cache store started");

        match corrupt {
            Some(e) => Err(OfflineError::StorageCorrupt(e)),
            None => Ok(()),
        }
    }

    /// Tear down the connectivity listener. Cached state stays readable.
    pub fn stop(&self) {
        if let Some(handle) = self.listener.lock().unwrap().take() {
            handle.abort();
            debug!("Connectivity listener stopped");
        }
    }

    /// Current connectivity as last reported by the host.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Snapshot of the cached video list, oldest distinct insertion first.
    pub async fn cached_videos(&self) -> Vec<CachedVideo> {
        self.videos.read().await.clone()
    }

    /// Cache a video for offline playback.
    ///
    /// Any existing record with the same `id` is replaced (last-write-wins)
    /// and moves to the end of the list; `cached_at` is stamped from the
    /// injected clock.
    #[instrument(skip(self, meta), fields(video_id = %meta.id))]
    pub async fn cache_video(&self, meta: VideoMeta) -> Result<()> {
        let video_id = meta.id.clone();
        let cached_at = self.clock.unix_timestamp_millis();

        let mut guard = self.videos.write().await;
        let mut next: Vec<CachedVideo> = guard
            .iter()
            .filter(|v| v.id != video_id)
            .cloned()
            .collect();
        next.push(meta.into_record(cached_at));

        self.persist(&next).await?;
        *guard = next;
        drop(guard);

        debug!(cached_at, "Video cached");
        self.emit(CoreEvent::Cache(CacheEvent::VideoCached { video_id }));
        Ok(())
    }

    /// Remove the record with the given `id`, if present.
    ///
    /// Removing an absent `id` is a no-op, not an error; the resulting list
    /// is persisted either way.
    #[instrument(skip(self))]
    pub async fn remove_cached_video(&self, id: &str) -> Result<()> {
        let mut guard = self.videos.write().await;
        let next: Vec<CachedVideo> = guard.iter().filter(|v| v.id != id).cloned().collect();
        let removed = next.len() < guard.len();

        self.persist(&next).await?;
        *guard = next;
        drop(guard);

        if removed {
            debug!("Video removed from cache");
            self.emit(CoreEvent::Cache(CacheEvent::VideoRemoved {
                video_id: id.to_string(),
            }));
        }
        Ok(())
    }

    /// Empty the cache and delete the persisted key entirely.
    ///
    /// After this call the storage key is absent, not an empty-array value.
    #[instrument(skip(self))]
    pub async fn clear_cache(&self) -> Result<()> {
        let mut guard = self.videos.write().await;
        self.kv.delete(CACHE_STORAGE_KEY).await?;
        let removed = guard.len();
        guard.clear();
        drop(guard);

        info!(removed, "Offline cache cleared");
        self.emit(CoreEvent::Cache(CacheEvent::CacheCleared { removed }));
        Ok(())
    }

    async fn persist(&self, videos: &[CachedVideo]) -> Result<()> {
        let raw = serde_json::to_string(videos)?;
        self.kv.set(CACHE_STORAGE_KEY, &raw).await?;
        Ok(())
    }

    fn emit(&self, event: CoreEvent) {
        if let Some(bus) = &self.events {
            bus.emit(event).ok();
        }
    }
}

impl Drop for OfflineCacheStore {
    fn drop(&mut self) {
        self.stop();
    }
}

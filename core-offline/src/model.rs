//! Cache record types.

use serde::{Deserialize, Serialize};

/// A locally persisted description of a video, sufficient to display it
/// without network access.
///
/// Serialized with camelCase field names so the persisted JSON matches what
/// web hosts already store under the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedVideo {
    /// Unique key within the store.
    pub id: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub caption: String,
    /// Milliseconds since epoch, stamped by the store at insertion time.
    pub cached_at: i64,
}

/// Caller-supplied video description; `cached_at` is never supplied by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMeta {
    pub id: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub caption: String,
}

impl VideoMeta {
    pub(crate) fn into_record(self, cached_at: i64) -> CachedVideo {
        CachedVideo {
            id: self.id,
            video_url: self.video_url,
            thumbnail_url: self.thumbnail_url,
            caption: self.caption,
            cached_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = CachedVideo {
            id: "v1".to_string(),
            video_url: "u1".to_string(),
            thumbnail_url: "t1".to_string(),
            caption: "hello".to_string(),
            cached_at: 1_700_000_000_000,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"videoUrl\":\"u1\""));
        assert!(json.contains("\"thumbnailUrl\":\"t1\""));
        assert!(json.contains("\"cachedAt\":1700000000000"));

        let back: CachedVideo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_meta_into_record_stamps_timestamp() {
        let meta = VideoMeta {
            id: "v1".to_string(),
            video_url: "u1".to_string(),
            thumbnail_url: "t1".to_string(),
            caption: "hello".to_string(),
        };

        let record = meta.into_record(42);
        assert_eq!(record.id, "v1");
        assert_eq!(record.cached_at, 42);
    }
}

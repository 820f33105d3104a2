//! Object and bucket metadata types
//!
//! Metadata is retrieved on demand from the service and never cached.

use serde::{Deserialize, Serialize};

/// Metadata for a stored object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Object key within its bucket
    pub key: String,

    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,

    /// Content type reported by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Last modified timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<jiff::Timestamp>,

    /// ETag (usually MD5 for single-part uploads)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl ObjectInfo {
    /// Create a new ObjectInfo with a known size
    pub fn new(key: impl Into<String>, size: i64) -> Self {
        Self {
            key: key.into(),
            size_bytes: Some(size),
            content_type: None,
            last_modified: None,
            etag: None,
        }
    }

    /// Human-readable size, if known
    pub fn size_human(&self) -> Option<String> {
        self.size_bytes
            .map(|s| humansize::format_size(s.max(0) as u64, humansize::BINARY))
    }
}

/// Metadata for a bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Bucket name
    pub name: String,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<jiff::Timestamp>,
}

impl BucketInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_info_new() {
        let info = ObjectInfo::new("test.txt", 1024);
        assert_eq!(info.key, "test.txt");
        assert_eq!(info.size_bytes, Some(1024));
        assert_eq!(info.size_human().as_deref(), Some("1 KiB"));
    }

    #[test]
    fn test_object_info_json_skips_absent_fields() {
        let info = ObjectInfo::new("a", 0);
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"key\":\"a\""));
        assert!(!json.contains("content_type"));
        assert!(!json.contains("etag"));
    }

    #[test]
    fn test_bucket_info_new() {
        let info = BucketInfo::new("my-bucket");
        assert_eq!(info.name, "my-bucket");
        assert!(info.created.is_none());
    }
}

//! ObjectStore trait definition
//!
//! This trait is the capability object bound to one set of credentials and
//! one service endpoint. It decouples the operation layer from the specific
//! S3 SDK implementation, allowing test doubles.
//!
//! Ownership: the process holds exactly one `ObjectStore` for its lifetime;
//! operations borrow it per call and hold no state across calls.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BucketInfo, ObjectInfo};

/// Atomic operations against an S3-compatible storage service.
///
/// Transfers stream: `put_object` reads the local file incrementally and
/// `get_object` writes bytes to the destination as they arrive. Both fully
/// drain the stream before returning; a stream error after a partial
/// transfer fails the whole call and leaves no partial local file behind.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store the file at `source` under `bucket`/`key`
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: Option<&str>,
    ) -> Result<ObjectInfo>;

    /// Fetch `bucket`/`key` into the local file at `dest`, returning the
    /// number of bytes written
    async fn get_object(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64>;

    /// Enumerate the objects in a bucket
    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectInfo>>;

    /// Get object metadata without fetching the body
    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectInfo>;

    /// Server-side copy of `bucket`/`src_key` to `bucket`/`dst_key`
    async fn copy_object(&self, bucket: &str, src_key: &str, dst_key: &str)
        -> Result<ObjectInfo>;

    /// Delete `bucket`/`key`
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;

    /// Enumerate the buckets owned by the credentials
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

    /// The access URL for an object at this endpoint
    fn object_url(&self, bucket: &str, key: &str) -> String;
}

//! Single-call operations
//!
//! Each operation here is one request/response cycle against an
//! [`ObjectStore`]. Operations return structured outcomes and never print;
//! presentation to the terminal is layered on top by the CLI crate.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::store::ObjectStore;
use crate::types::{BucketInfo, ObjectInfo};

/// Outcome of a completed upload or download
#[derive(Debug, Clone, Serialize)]
pub struct Transfer {
    pub bucket: String,
    pub key: String,
    pub local_path: PathBuf,
    pub size_bytes: u64,
}

/// Object metadata plus its constructed access URL, as returned by `info`
#[derive(Debug, Clone, Serialize)]
pub struct ObjectDetail {
    #[serde(flatten)]
    pub info: ObjectInfo,
    pub url: String,
}

/// Upload a local file to `bucket`.
///
/// When `key` is absent the file's base name is used. The local file is
/// left unchanged.
pub async fn upload<S>(
    store: &S,
    bucket: &str,
    file: &Path,
    key: Option<&str>,
) -> Result<Transfer>
where
    S: ObjectStore + ?Sized,
{
    let key = match key {
        Some(k) => k.to_string(),
        None => file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::Usage(format!(
                    "cannot derive an object key from '{}'",
                    file.display()
                ))
            })?,
    };

    let guessed: Option<String> = mime_guess::from_path(file)
        .first()
        .map(|m| m.essence_str().to_string());

    let info = store
        .put_object(bucket, &key, file, guessed.as_deref())
        .await?;
    tracing::debug!(bucket, key = %key, "uploaded object");

    Ok(Transfer {
        bucket: bucket.to_string(),
        key,
        local_path: file.to_path_buf(),
        size_bytes: info.size_bytes.unwrap_or(0).max(0) as u64,
    })
}

/// Download `bucket`/`key` to a local file.
///
/// When `dest` is absent the key itself is used as the destination path.
/// Parent directories are created as needed; an existing file is
/// overwritten.
pub async fn download<S>(
    store: &S,
    bucket: &str,
    key: &str,
    dest: Option<&Path>,
) -> Result<Transfer>
where
    S: ObjectStore + ?Sized,
{
    let dest: PathBuf = dest
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(key));

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let written = store.get_object(bucket, key, &dest).await?;
    tracing::debug!(bucket, key, bytes = written, "downloaded object");

    Ok(Transfer {
        bucket: bucket.to_string(),
        key: key.to_string(),
        local_path: dest,
        size_bytes: written,
    })
}

/// Enumerate all objects in `bucket`. An empty bucket is a valid success.
pub async fn list<S>(store: &S, bucket: &str) -> Result<Vec<ObjectInfo>>
where
    S: ObjectStore + ?Sized,
{
    store.list_objects(bucket).await
}

/// Fetch metadata for `bucket`/`key` along with its access URL
pub async fn info<S>(store: &S, bucket: &str, key: &str) -> Result<ObjectDetail>
where
    S: ObjectStore + ?Sized,
{
    let info = store.head_object(bucket, key).await?;
    Ok(ObjectDetail {
        info,
        url: store.object_url(bucket, key),
    })
}

/// Delete `bucket`/`key`.
///
/// Idempotent at this layer: deleting an absent key is not distinguished
/// from deleting a present one. A missing bucket is still an error.
pub async fn delete<S>(store: &S, bucket: &str, key: &str) -> Result<()>
where
    S: ObjectStore + ?Sized,
{
    match store.delete_object(bucket, key).await {
        Err(Error::NotFound(_)) => Ok(()),
        other => other,
    }
}

/// Enumerate all buckets owned by the credentials
pub async fn buckets<S>(store: &S) -> Result<Vec<BucketInfo>>
where
    S: ObjectStore + ?Sized,
{
    store.list_buckets().await
}

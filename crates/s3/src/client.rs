//! R2 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from r2-core.
//! One client is bound to one set of credentials and one endpoint for the
//! process lifetime; it exclusively owns the network session.

use std::path::Path;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use r2_core::{BucketInfo, Credentials, Error, ObjectInfo, ObjectStore, Result};

/// S3-compatible storage client bound to a single endpoint
pub struct R2Client {
    inner: aws_sdk_s3::Client,
    credentials: Credentials,
}

impl R2Client {
    /// Create a new client from environment-sourced credentials
    pub async fn new(credentials: Credentials) -> Result<Self> {
        let provider = aws_credential_types::Credentials::new(
            credentials.access_key.clone(),
            credentials.secret_key.clone(),
            None, // session token
            None, // expiry
            "r2-static-credentials",
        );

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(provider)
            .region(aws_config::Region::new(credentials.region.clone()))
            .endpoint_url(credentials.endpoint())
            .load()
            .await;

        // Path-style addressing works for R2's account endpoint and for
        // self-hosted S3-compatible servers alike
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        tracing::debug!(endpoint = %credentials.endpoint(), "created storage client");

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
            credentials,
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }

    /// Stream a response body into `dest`, removing the partial file on any
    /// error so no partially transferred object is left behind
    async fn drain_to_file(
        dest: &Path,
        mut body: aws_sdk_s3::primitives::ByteStream,
    ) -> Result<u64> {
        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| Error::Transfer(format!("cannot create {}: {e}", dest.display())))?;

        let mut written: u64 = 0;
        let result: Result<u64> = loop {
            match body.try_next().await {
                Ok(Some(chunk)) => {
                    if let Err(e) = file.write_all(&chunk).await {
                        break Err(Error::Transfer(format!(
                            "write to {} failed: {e}",
                            dest.display()
                        )));
                    }
                    written += chunk.len() as u64;
                }
                Ok(None) => match file.flush().await {
                    Ok(()) => break Ok(written),
                    Err(e) => {
                        break Err(Error::Transfer(format!(
                            "flush of {} failed: {e}",
                            dest.display()
                        )));
                    }
                },
                Err(e) => {
                    break Err(Error::Transfer(format!(
                        "stream ended after {written} bytes: {e}"
                    )));
                }
            }
        };

        if result.is_err() {
            drop(file);
            let _ = tokio::fs::remove_file(dest).await;
        }
        result
    }
}

/// Classify a service failure by its error text, in lieu of fully modeled
/// error variants across all S3 operations
fn classify(target: &str, err: impl std::fmt::Display) -> Error {
    let text = err.to_string();
    if text.contains("NoSuchBucket") {
        Error::BucketNotFound(target.to_string())
    } else if text.contains("NotFound") || text.contains("NoSuchKey") {
        Error::NotFound(target.to_string())
    } else if text.contains("AccessDenied")
        || text.contains("InvalidAccessKeyId")
        || text.contains("SignatureDoesNotMatch")
    {
        Error::Auth(text)
    } else {
        Error::Remote(text)
    }
}

#[async_trait]
impl ObjectStore for R2Client {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: Option<&str>,
    ) -> Result<ObjectInfo> {
        let size = tokio::fs::metadata(source)
            .await
            .map_err(|e| Error::Transfer(format!("cannot read {}: {e}", source.display())))?
            .len() as i64;

        // Streams the file without buffering the whole object in memory
        let body = aws_sdk_s3::primitives::ByteStream::from_path(source)
            .await
            .map_err(|e| Error::Transfer(format!("cannot read {}: {e}", source.display())))?;

        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify(&format!("{bucket}/{key}"), e))?;

        let mut info = ObjectInfo::new(key, size);
        if let Some(etag) = response.e_tag() {
            info.etag = Some(etag.trim_matches('"').to_string());
        }
        info.last_modified = Some(jiff::Timestamp::now());

        Ok(info)
    }

    async fn get_object(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64> {
        let response = self
            .inner
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_no_such_key() {
                    Error::NotFound(format!("{bucket}/{key}"))
                } else {
                    classify(&format!("{bucket}/{key}"), service)
                }
            })?;

        Self::drain_to_file(dest, response.body).await
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectInfo>> {
        let response = self
            .inner
            .list_objects_v2()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_no_such_bucket() {
                    Error::BucketNotFound(bucket.to_string())
                } else {
                    classify(bucket, service)
                }
            })?;

        let items = response
            .contents()
            .iter()
            .map(|object| {
                let mut info =
                    ObjectInfo::new(object.key().unwrap_or_default(), object.size().unwrap_or(0));
                if let Some(modified) = object.last_modified() {
                    info.last_modified = jiff::Timestamp::from_second(modified.secs()).ok();
                }
                if let Some(etag) = object.e_tag() {
                    info.etag = Some(etag.trim_matches('"').to_string());
                }
                info
            })
            .collect();

        Ok(items)
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectInfo> {
        let response = self
            .inner
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service = e.into_service_error();
                if service.is_not_found() {
                    Error::NotFound(format!("{bucket}/{key}"))
                } else {
                    classify(&format!("{bucket}/{key}"), service)
                }
            })?;

        let mut info = ObjectInfo::new(key, response.content_length().unwrap_or(0));
        if let Some(modified) = response.last_modified() {
            info.last_modified = jiff::Timestamp::from_second(modified.secs()).ok();
        }
        if let Some(ct) = response.content_type() {
            info.content_type = Some(ct.to_string());
        }
        if let Some(etag) = response.e_tag() {
            info.etag = Some(etag.trim_matches('"').to_string());
        }

        Ok(info)
    }

    async fn copy_object(
        &self,
        bucket: &str,
        src_key: &str,
        dst_key: &str,
    ) -> Result<ObjectInfo> {
        // Copy source is expressed as bucket/key
        let copy_source = format!("{bucket}/{src_key}");

        let response = self
            .inner
            .copy_object()
            .copy_source(&copy_source)
            .bucket(bucket)
            .key(dst_key)
            .send()
            .await
            .map_err(|e| classify(&format!("{bucket}/{src_key}"), e))?;

        // The copy response carries no size; head the destination for it
        let mut info = self.head_object(bucket, dst_key).await?;
        if let Some(result) = response.copy_object_result() {
            if let Some(etag) = result.e_tag() {
                info.etag = Some(etag.trim_matches('"').to_string());
            }
        }

        Ok(info)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify(&format!("{bucket}/{key}"), e))?;

        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(|e| classify("buckets", e))?;

        let buckets = response
            .buckets()
            .iter()
            .map(|b| {
                let mut info = BucketInfo::new(b.name().unwrap_or_default());
                if let Some(created) = b.creation_date() {
                    info.created = jiff::Timestamp::from_second(created.secs()).ok();
                }
                info
            })
            .collect();

        Ok(buckets)
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        self.credentials.object_url(bucket, key)
    }
}

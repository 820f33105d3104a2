//! In-memory ObjectStore for tests
//!
//! Buckets must exist before use; `deny_delete` simulates a delete
//! permission revoked mid-operation.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::store::ObjectStore;
use crate::types::{BucketInfo, ObjectInfo};

#[derive(Default)]
struct State {
    // bucket name -> key -> stored bytes
    buckets: BTreeMap<String, BTreeMap<String, Stored>>,
    deny_delete: bool,
}

#[derive(Clone)]
struct Stored {
    data: Vec<u8>,
    content_type: Option<String>,
    last_modified: jiff::Timestamp,
}

pub(crate) struct MemStore {
    state: Mutex<State>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_bucket(name: &str) -> Self {
        let store = Self::new();
        store.add_bucket(name);
        store
    }

    pub fn add_bucket(&self, name: &str) {
        self.state
            .lock()
            .unwrap()
            .buckets
            .entry(name.to_string())
            .or_default();
    }

    pub fn put(&self, bucket: &str, key: &str, data: &[u8]) {
        let mut state = self.state.lock().unwrap();
        state
            .buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), Stored {
                data: data.to_vec(),
                content_type: None,
                last_modified: jiff::Timestamp::now(),
            });
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.content(bucket, key).is_some()
    }

    pub fn content(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        let state = self.state.lock().unwrap();
        state
            .buckets
            .get(bucket)
            .and_then(|b| b.get(key))
            .map(|s| s.data.clone())
    }

    pub fn deny_delete(&self) {
        self.state.lock().unwrap().deny_delete = true;
    }

    fn info_for(key: &str, stored: &Stored) -> ObjectInfo {
        ObjectInfo {
            key: key.to_string(),
            size_bytes: Some(stored.data.len() as i64),
            content_type: stored.content_type.clone(),
            last_modified: Some(stored.last_modified),
            etag: None,
        }
    }
}

#[async_trait]
impl ObjectStore for MemStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: Option<&str>,
    ) -> Result<ObjectInfo> {
        let data = std::fs::read(source)
            .map_err(|e| Error::Transfer(format!("cannot read {}: {e}", source.display())))?;

        let mut state = self.state.lock().unwrap();
        let objects = state
            .buckets
            .get_mut(bucket)
            .ok_or_else(|| Error::BucketNotFound(bucket.to_string()))?;

        let stored = Stored {
            data,
            content_type: content_type.map(str::to_string),
            last_modified: jiff::Timestamp::now(),
        };
        let info = Self::info_for(key, &stored);
        objects.insert(key.to_string(), stored);
        Ok(info)
    }

    async fn get_object(&self, bucket: &str, key: &str, dest: &Path) -> Result<u64> {
        let data = {
            let state = self.state.lock().unwrap();
            state
                .buckets
                .get(bucket)
                .ok_or_else(|| Error::BucketNotFound(bucket.to_string()))?
                .get(key)
                .ok_or_else(|| Error::NotFound(format!("{bucket}/{key}")))?
                .data
                .clone()
        };
        std::fs::write(dest, &data)
            .map_err(|e| Error::Transfer(format!("cannot write {}: {e}", dest.display())))?;
        Ok(data.len() as u64)
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectInfo>> {
        let state = self.state.lock().unwrap();
        let objects = state
            .buckets
            .get(bucket)
            .ok_or_else(|| Error::BucketNotFound(bucket.to_string()))?;
        Ok(objects
            .iter()
            .map(|(k, s)| Self::info_for(k, s))
            .collect())
    }

    async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectInfo> {
        let state = self.state.lock().unwrap();
        state
            .buckets
            .get(bucket)
            .ok_or_else(|| Error::BucketNotFound(bucket.to_string()))?
            .get(key)
            .map(|s| Self::info_for(key, s))
            .ok_or_else(|| Error::NotFound(format!("{bucket}/{key}")))
    }

    async fn copy_object(
        &self,
        bucket: &str,
        src_key: &str,
        dst_key: &str,
    ) -> Result<ObjectInfo> {
        let mut state = self.state.lock().unwrap();
        let objects = state
            .buckets
            .get_mut(bucket)
            .ok_or_else(|| Error::BucketNotFound(bucket.to_string()))?;
        let stored = objects
            .get(src_key)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("{bucket}/{src_key}")))?;
        let info = Self::info_for(dst_key, &stored);
        objects.insert(dst_key.to_string(), stored);
        Ok(info)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.deny_delete {
            return Err(Error::Auth(format!("delete denied for {bucket}/{key}")));
        }
        let objects = state
            .buckets
            .get_mut(bucket)
            .ok_or_else(|| Error::BucketNotFound(bucket.to_string()))?;
        objects
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("{bucket}/{key}")))
    }

    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .buckets
            .keys()
            .map(|name| BucketInfo::new(name.clone()))
            .collect())
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("https://test.invalid/{bucket}/{key}")
    }
}

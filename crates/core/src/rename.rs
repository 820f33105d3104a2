//! Rename operation
//!
//! The service has no native atomic rename, so a rename is a copy to the
//! new key followed by a delete of the old key. The gap between the two
//! calls forces an explicit failure policy: this implementation never rolls
//! back the copy on delete failure, because the delete failure may be
//! transient or specific to permissions on the old key, and destroying the
//! freshly written object would lose data. The two failure exits are kept
//! distinct so the caller always knows whether manual cleanup is needed.

use serde::Serialize;

use crate::error::Error;
use crate::store::ObjectStore;
use crate::types::ObjectInfo;

/// States of one rename invocation.
///
/// `Idle → Copying → Copied → Deleting → Completed`, with terminal failure
/// exits `Copying → CopyFailed` and `Deleting → DeleteFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameState {
    Idle,
    Copying,
    Copied,
    Deleting,
    Completed,
    CopyFailed,
    DeleteFailed,
}

impl RenameState {
    /// Whether this state ends the operation
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            RenameState::Completed | RenameState::CopyFailed | RenameState::DeleteFailed
        )
    }
}

/// Terminal outcome of a rename
#[derive(Debug)]
pub enum RenameOutcome {
    /// Copy and delete both succeeded; only the new key exists
    Completed { info: ObjectInfo },

    /// The copy request failed; nothing changed, the old object is
    /// untouched and no object was created at the new key
    CopyFailed { error: Error },

    /// The copy succeeded but the delete did not: the object now exists at
    /// both keys and the old key requires manual cleanup
    DeleteFailed { info: ObjectInfo, error: Error },
}

/// One copy-then-delete rename invocation
pub struct RenameOp<'a, S: ObjectStore + ?Sized> {
    store: &'a S,
    bucket: &'a str,
    old_key: &'a str,
    new_key: &'a str,
    state: RenameState,
}

impl<'a, S: ObjectStore + ?Sized> RenameOp<'a, S> {
    pub fn new(store: &'a S, bucket: &'a str, old_key: &'a str, new_key: &'a str) -> Self {
        Self {
            store,
            bucket,
            old_key,
            new_key,
            state: RenameState::Idle,
        }
    }

    /// Current state of the operation
    pub fn state(&self) -> RenameState {
        self.state
    }

    /// Drive the operation to a terminal state.
    ///
    /// The delete step uses the raw store delete rather than the idempotent
    /// operation-layer delete: a genuine delete failure here must surface,
    /// since it leaves the object at both keys.
    pub async fn run(&mut self) -> RenameOutcome {
        debug_assert_eq!(self.state, RenameState::Idle);

        self.state = RenameState::Copying;
        tracing::debug!(
            bucket = self.bucket,
            from = self.old_key,
            to = self.new_key,
            "copying object"
        );

        let info = match self
            .store
            .copy_object(self.bucket, self.old_key, self.new_key)
            .await
        {
            Ok(info) => {
                self.state = RenameState::Copied;
                info
            }
            Err(error) => {
                self.state = RenameState::CopyFailed;
                return RenameOutcome::CopyFailed { error };
            }
        };

        self.state = RenameState::Deleting;
        tracing::debug!(bucket = self.bucket, key = self.old_key, "deleting old key");

        match self.store.delete_object(self.bucket, self.old_key).await {
            Ok(()) => {
                self.state = RenameState::Completed;
                RenameOutcome::Completed { info }
            }
            Err(error) => {
                self.state = RenameState::DeleteFailed;
                tracing::warn!(
                    bucket = self.bucket,
                    old_key = self.old_key,
                    new_key = self.new_key,
                    "delete after copy failed; object exists at both keys"
                );
                RenameOutcome::DeleteFailed { info, error }
            }
        }
    }
}

/// Rename `bucket`/`old_key` to `bucket`/`new_key`
pub async fn rename<S>(store: &S, bucket: &str, old_key: &str, new_key: &str) -> RenameOutcome
where
    S: ObjectStore + ?Sized,
{
    RenameOp::new(store, bucket, old_key, new_key).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teststore::MemStore;

    fn seed(store: &MemStore, key: &str, content: &[u8]) {
        store.put("b", key, content);
    }

    #[tokio::test]
    async fn test_rename_success() {
        let store = MemStore::with_bucket("b");
        seed(&store, "old.txt", b"payload");

        let mut op = RenameOp::new(&store, "b", "old.txt", "new.txt");
        let outcome = op.run().await;

        assert!(matches!(outcome, RenameOutcome::Completed { .. }));
        assert_eq!(op.state(), RenameState::Completed);
        assert!(op.state().is_terminal());

        assert!(!store.contains("b", "old.txt"));
        assert_eq!(store.content("b", "new.txt").as_deref(), Some(&b"payload"[..]));
    }

    #[tokio::test]
    async fn test_rename_preserves_size() {
        let store = MemStore::with_bucket("b");
        seed(&store, "old", b"twelve bytes");

        match rename(&store, "b", "old", "new").await {
            RenameOutcome::Completed { info } => {
                assert_eq!(info.size_bytes, Some(12));
                assert_eq!(info.key, "new");
            }
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rename_copy_failure_has_no_side_effects() {
        let store = MemStore::with_bucket("b");

        let mut op = RenameOp::new(&store, "b", "missing", "new");
        let outcome = op.run().await;

        match outcome {
            RenameOutcome::CopyFailed { error } => assert!(error.is_not_found()),
            other => panic!("expected CopyFailed, got {other:?}"),
        }
        assert_eq!(op.state(), RenameState::CopyFailed);

        // Nothing was created at the destination
        assert!(!store.contains("b", "new"));
        assert!(!store.contains("b", "missing"));
    }

    #[tokio::test]
    async fn test_rename_delete_failure_leaves_both_keys() {
        let store = MemStore::with_bucket("b");
        seed(&store, "old", b"data");
        // Simulate a delete permission revoked after the copy succeeds
        store.deny_delete();

        let mut op = RenameOp::new(&store, "b", "old", "new");
        let outcome = op.run().await;

        match outcome {
            RenameOutcome::DeleteFailed { info, error } => {
                assert_eq!(info.key, "new");
                assert!(matches!(error, Error::Auth(_)));
            }
            other => panic!("expected DeleteFailed, got {other:?}"),
        }
        assert_eq!(op.state(), RenameState::DeleteFailed);

        // Deliberate inconsistent intermediate state: both objects exist
        assert!(store.contains("b", "old"));
        assert!(store.contains("b", "new"));
    }

    #[test]
    fn test_terminal_states() {
        assert!(RenameState::Completed.is_terminal());
        assert!(RenameState::CopyFailed.is_terminal());
        assert!(RenameState::DeleteFailed.is_terminal());
        assert!(!RenameState::Idle.is_terminal());
        assert!(!RenameState::Copying.is_terminal());
        assert!(!RenameState::Copied.is_terminal());
        assert!(!RenameState::Deleting.is_terminal());
    }
}

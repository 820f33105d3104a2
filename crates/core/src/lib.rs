//! r2-core: core library for the r2 CLI
//!
//! This crate provides the operation layer of the CLI:
//! - Credential acquisition from the environment
//! - Object and bucket metadata types
//! - The ObjectStore trait, the capability object for one endpoint
//! - Single-call operations (upload, download, list, info, delete, buckets)
//! - The composite copy-then-delete rename with explicit partial-failure
//!   reporting
//!
//! This crate is independent of any specific S3 SDK, allowing the
//! operations and the rename state machine to be tested against an
//! in-memory store.

pub mod credentials;
pub mod error;
pub mod ops;
pub mod rename;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod teststore;

pub use credentials::Credentials;
pub use error::{Error, Result};
pub use rename::{RenameOp, RenameOutcome, RenameState, rename};
pub use store::ObjectStore;
pub use types::{BucketInfo, ObjectInfo};

//! r2-s3: AWS SDK adapter for the r2 CLI
//!
//! This crate provides the implementation of the ObjectStore trait using
//! the aws-sdk-s3 crate. It is the only crate that directly depends on the
//! AWS SDK.

pub mod client;

pub use client::R2Client;

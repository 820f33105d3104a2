//! upload command - Upload a local file to a bucket
//!
//! Streams the file to the service; the local file is left unchanged.

use std::path::PathBuf;

use clap::Args;
use r2_core::ops;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Upload a local file
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Target bucket
    pub bucket: String,

    /// Local file to upload
    pub file: PathBuf,

    /// Destination key (defaults to the file's base name)
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
struct UploadOutput {
    status: &'static str,
    bucket: String,
    key: String,
    size_bytes: u64,
}

/// Execute the upload command
pub async fn execute(args: UploadArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match crate::commands::connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    match ops::upload(&client, &args.bucket, &args.file, args.key.as_deref()).await {
        Ok(transfer) => {
            if formatter.is_json() {
                formatter.json(&UploadOutput {
                    status: "success",
                    bucket: transfer.bucket,
                    key: transfer.key,
                    size_bytes: transfer.size_bytes,
                });
            } else {
                formatter.println(&format!(
                    "{} -> {}/{} ({})",
                    args.file.display(),
                    transfer.bucket,
                    transfer.key,
                    humansize::format_size(transfer.size_bytes, humansize::BINARY)
                ));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to upload {}: {e}", args.file.display()));
            ExitCode::from_error(&e)
        }
    }
}

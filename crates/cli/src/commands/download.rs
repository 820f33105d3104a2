//! download command - Download an object to a local file
//!
//! Streams remote bytes to disk; a stream error removes the partial file.

use std::path::PathBuf;

use clap::Args;
use r2_core::ops;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Download an object
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Source bucket
    pub bucket: String,

    /// Object key to download
    pub key: String,

    /// Local destination path (defaults to the key)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct DownloadOutput {
    status: &'static str,
    bucket: String,
    key: String,
    local_path: PathBuf,
    size_bytes: u64,
}

/// Execute the download command
pub async fn execute(args: DownloadArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match crate::commands::connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    match ops::download(&client, &args.bucket, &args.key, args.path.as_deref()).await {
        Ok(transfer) => {
            if formatter.is_json() {
                formatter.json(&DownloadOutput {
                    status: "success",
                    bucket: transfer.bucket,
                    key: transfer.key,
                    local_path: transfer.local_path,
                    size_bytes: transfer.size_bytes,
                });
            } else {
                formatter.println(&format!(
                    "{}/{} -> {} ({})",
                    transfer.bucket,
                    transfer.key,
                    transfer.local_path.display(),
                    humansize::format_size(transfer.size_bytes, humansize::BINARY)
                ));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to download {}/{}: {e}",
                args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}

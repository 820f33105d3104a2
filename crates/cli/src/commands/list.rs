//! list command - List the objects in a bucket
//!
//! Single listing call; output order is whatever the service returns
//! (lexicographic by key for S3-compatible servers).

use clap::Args;
use r2_core::{ObjectInfo, ops};
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List objects in a bucket
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Bucket to list
    pub bucket: String,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    bucket: String,
    objects: Vec<ObjectInfo>,
    count: usize,
}

/// Execute the list command
pub async fn execute(args: ListArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match crate::commands::connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    match ops::list(&client, &args.bucket).await {
        Ok(objects) => {
            if formatter.is_json() {
                formatter.json(&ListOutput {
                    count: objects.len(),
                    bucket: args.bucket,
                    objects,
                });
            } else if objects.is_empty() {
                formatter.println(&format!("Bucket '{}' is empty", args.bucket));
            } else {
                for object in &objects {
                    let date = crate::commands::format_timestamp(object.last_modified);
                    let size = object.size_human().unwrap_or_else(|| "?".to_string());
                    formatter.println(&format!("[{date}] {size:>10} {}", object.key));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list bucket '{}': {e}", args.bucket));
            ExitCode::from_error(&e)
        }
    }
}

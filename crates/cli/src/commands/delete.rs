//! delete command - Delete an object
//!
//! Deleting an absent key succeeds; the end state is the same either way.

use clap::Args;
use r2_core::ops;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Delete an object
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Bucket containing the object
    pub bucket: String,

    /// Object key to delete
    pub key: String,
}

#[derive(Debug, Serialize)]
struct DeleteOutput {
    status: &'static str,
    bucket: String,
    key: String,
}

/// Execute the delete command
pub async fn execute(args: DeleteArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match crate::commands::connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    match ops::delete(&client, &args.bucket, &args.key).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&DeleteOutput {
                    status: "success",
                    bucket: args.bucket,
                    key: args.key,
                });
            } else {
                formatter.success(&format!("Deleted {}/{}", args.bucket, args.key));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to delete {}/{}: {e}",
                args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}

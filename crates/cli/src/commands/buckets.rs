//! buckets command - List all buckets owned by the credentials

use clap::Args;
use r2_core::{BucketInfo, ops};
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List buckets
#[derive(Args, Debug)]
pub struct BucketsArgs {}

#[derive(Debug, Serialize)]
struct BucketsOutput {
    buckets: Vec<BucketInfo>,
    count: usize,
}

/// Execute the buckets command
pub async fn execute(_args: BucketsArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match crate::commands::connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    match ops::buckets(&client).await {
        Ok(buckets) => {
            if formatter.is_json() {
                formatter.json(&BucketsOutput {
                    count: buckets.len(),
                    buckets,
                });
            } else if buckets.is_empty() {
                formatter.println("No buckets");
            } else {
                for bucket in &buckets {
                    let date = crate::commands::format_timestamp(bucket.created);
                    formatter.println(&format!("[{date}] {}/", bucket.name));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list buckets: {e}"));
            ExitCode::from_error(&e)
        }
    }
}

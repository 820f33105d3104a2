//! info command - Show object metadata and its access URL

use clap::Args;
use r2_core::ops;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Show object metadata
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Bucket containing the object
    pub bucket: String,

    /// Object key to inspect
    pub key: String,
}

/// Execute the info command
pub async fn execute(args: InfoArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match crate::commands::connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    match ops::info(&client, &args.bucket, &args.key).await {
        Ok(detail) => {
            if formatter.is_json() {
                formatter.json(&detail);
            } else {
                formatter.println(&format!("Name     : {}", detail.info.key));
                formatter.println(&format!(
                    "Size     : {}",
                    detail.info.size_human().unwrap_or_else(|| "?".to_string())
                ));
                if let Some(ct) = &detail.info.content_type {
                    formatter.println(&format!("Type     : {ct}"));
                }
                if let Some(ts) = detail.info.last_modified {
                    formatter.println(&format!(
                        "Modified : {}",
                        crate::commands::format_timestamp(Some(ts))
                    ));
                }
                if let Some(etag) = &detail.info.etag {
                    formatter.println(&format!("ETag     : {etag}"));
                }
                formatter.println(&format!("URL      : {}", detail.url));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to stat {}/{}: {e}",
                args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}

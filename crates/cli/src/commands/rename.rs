//! rename command - Rename or move an object within a bucket
//!
//! There is no native rename on the wire: the object is copied to the new
//! key, then the old key is deleted. A failed copy changes nothing; a
//! failed delete leaves the object at both keys and is reported as such.

use clap::Args;
use r2_core::{RenameOutcome, rename};
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Rename an object
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Bucket containing the object
    pub bucket: String,

    /// Current object key
    pub old_key: String,

    /// New object key
    pub new_key: String,
}

#[derive(Debug, Serialize)]
struct RenameOutput {
    status: &'static str,
    bucket: String,
    old_key: String,
    new_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Map a rename outcome to the process exit code. Both failure exits
/// carry the underlying error, so both map per error kind.
fn outcome_exit_code(outcome: &RenameOutcome) -> ExitCode {
    match outcome {
        RenameOutcome::Completed { .. } => ExitCode::Success,
        RenameOutcome::CopyFailed { error } | RenameOutcome::DeleteFailed { error, .. } => {
            ExitCode::from_error(error)
        }
    }
}

/// Execute the rename command
pub async fn execute(args: RenameArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    if args.old_key == args.new_key {
        formatter.error("Old and new key are the same; nothing to do");
        return ExitCode::UsageError;
    }

    let client = match crate::commands::connect(&formatter).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    let outcome = rename(&client, &args.bucket, &args.old_key, &args.new_key).await;
    let code = outcome_exit_code(&outcome);

    match outcome {
        RenameOutcome::Completed { .. } => {
            if formatter.is_json() {
                formatter.json(&RenameOutput {
                    status: "success",
                    bucket: args.bucket,
                    old_key: args.old_key,
                    new_key: args.new_key,
                    error: None,
                });
            } else {
                formatter.success(&format!(
                    "Renamed {}/{} to {}/{}",
                    args.bucket, args.old_key, args.bucket, args.new_key
                ));
            }
        }
        RenameOutcome::CopyFailed { error } => {
            if formatter.is_json() {
                formatter.json(&RenameOutput {
                    status: "copy_failed",
                    bucket: args.bucket,
                    old_key: args.old_key,
                    new_key: args.new_key,
                    error: Some(error.to_string()),
                });
            } else {
                formatter.error(&format!(
                    "Failed to copy {}/{} to {}: {error}. Nothing was changed.",
                    args.bucket, args.old_key, args.new_key
                ));
            }
        }
        RenameOutcome::DeleteFailed { error, .. } => {
            if formatter.is_json() {
                formatter.json(&RenameOutput {
                    status: "delete_failed",
                    bucket: args.bucket,
                    old_key: args.old_key,
                    new_key: args.new_key,
                    error: Some(error.to_string()),
                });
            } else {
                formatter.warning(&format!(
                    "Copied {}/{} to {}, but deleting the old key failed: {error}",
                    args.bucket, args.old_key, args.new_key
                ));
                formatter.error(&format!(
                    "The object now exists at both '{}' and '{}'; remove '{}' manually",
                    args.old_key, args.new_key, args.old_key
                ));
            }
        }
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use r2_core::{Error, ObjectInfo};

    #[test]
    fn test_outcome_exit_codes_follow_error_kind() {
        let completed = RenameOutcome::Completed {
            info: ObjectInfo::new("new", 4),
        };
        assert_eq!(outcome_exit_code(&completed), ExitCode::Success);

        let copy_failed = RenameOutcome::CopyFailed {
            error: Error::NotFound("b/old".into()),
        };
        assert_eq!(outcome_exit_code(&copy_failed), ExitCode::NotFound);

        // A permission failure on the delete step reports as an auth
        // failure, same as it would anywhere else
        let delete_failed = RenameOutcome::DeleteFailed {
            info: ObjectInfo::new("new", 4),
            error: Error::Auth("delete denied".into()),
        };
        assert_eq!(outcome_exit_code(&delete_failed), ExitCode::AuthError);
    }
}

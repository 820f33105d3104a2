//! CLI command definitions and execution
//!
//! One process invocation runs exactly one command. Commands parse and
//! validate their arguments up front, perform a single operation against
//! the storage service, and report the outcome through the formatter and
//! the process exit code. Failures never crash the process.

use clap::{Parser, Subcommand};

use r2_core::Credentials;
use r2_s3::R2Client;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod buckets;
mod completions;
mod delete;
mod download;
mod info;
mod list;
mod rename;
mod upload;

/// r2 - command-line client for S3-compatible object storage
///
/// Credentials are read from the R2_ACCOUNT_ID, R2_ACCESS_KEY, and
/// R2_SECRET_KEY environment variables; R2_ENDPOINT overrides the
/// account-derived endpoint for other S3-compatible servers.
#[derive(Parser, Debug)]
#[command(name = "r2")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a local file to a bucket
    Upload(upload::UploadArgs),

    /// Download an object to a local file
    Download(download::DownloadArgs),

    /// List the objects in a bucket
    List(list::ListArgs),

    /// Show object metadata and its access URL
    Info(info::InfoArgs),

    /// Rename or move an object (copy to the new key, then delete the old)
    Rename(rename::RenameArgs),

    /// Delete an object
    Delete(delete::DeleteArgs),

    /// List all buckets owned by the credentials
    Buckets(buckets::BucketsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Upload(args) => upload::execute(args, output_config).await,
        Commands::Download(args) => download::execute(args, output_config).await,
        Commands::List(args) => list::execute(args, output_config).await,
        Commands::Info(args) => info::execute(args, output_config).await,
        Commands::Rename(args) => rename::execute(args, output_config).await,
        Commands::Delete(args) => delete::execute(args, output_config).await,
        Commands::Buckets(args) => buckets::execute(args, output_config).await,
        Commands::Completions(args) => completions::execute(args),
    }
}

/// Build the single storage client for this invocation from
/// environment-sourced credentials
pub(crate) async fn connect(formatter: &Formatter) -> Result<R2Client, ExitCode> {
    let credentials = Credentials::from_env();
    tracing::debug!(endpoint = %credentials.endpoint(), "connecting");
    match R2Client::new(credentials).await {
        Ok(client) => Ok(client),
        Err(e) => {
            formatter.error(&format!("Failed to create storage client: {e}"));
            Err(ExitCode::from_error(&e))
        }
    }
}

/// Format a timestamp for human-readable listings
pub(crate) fn format_timestamp(ts: Option<jiff::Timestamp>) -> String {
    ts.map(|t| t.strftime("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "                   ".to_string())
}

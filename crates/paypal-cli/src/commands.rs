//! Subcommands of the CLI.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a payout batch read from a JSON file
    Create {
        /// JSON file with `sender_batch_header` and `items`
        file: PathBuf,
        /// Wait for the batch to be processed before returning
        #[arg(long)]
        sync: bool,
        /// Idempotency key sent as PayPal-Request-Id
        #[arg(long)]
        request_id: Option<String>,
        /// Print the raw JSON response instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show the current state of a payout batch
    Get {
        /// Payout batch id assigned by PayPal
        payout_batch_id: String,
        /// Print the raw JSON response instead of a summary
        #[arg(long)]
        json: bool,
    },
}

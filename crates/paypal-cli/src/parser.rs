//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use paypal_payouts::Mode;

use crate::commands::Commands;

/// Target environment selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// PayPal sandbox
    Sandbox,
    /// PayPal production
    Live,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sandbox => Self::Sandbox,
            ModeArg::Live => Self::Live,
        }
    }
}

/// Command-line interface for submitting and inspecting payout batches.
#[derive(Parser)]
#[command(name = "paypal-payouts")]
#[command(about = "Submit and inspect PayPal payout batches")]
#[command(version)]
pub struct Cli {
    /// Access token used for API calls
    #[arg(long, env = "PAYPAL_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Properties file with `mode`, `service.EndPoint` and timeout settings
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Target environment (overrides the config file and PAYPAL_MODE)
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

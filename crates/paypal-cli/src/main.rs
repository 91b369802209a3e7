//! CLI entry point.
//!
//! Parses arguments, wires the client through bootstrap and dispatches to the
//! command handlers. Failures are reported on stderr and mapped to an exit code.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paypal_cli::handlers::create::CreateOptions;
use paypal_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

async fn run(cli: Cli, command: Commands) -> Result<(), CliError> {
    let config = CliConfig::resolve(cli.config.as_deref(), cli.mode.map(Into::into), cli.token)?;
    let ctx = bootstrap(config)?;

    match command {
        Commands::Create {
            file,
            sync,
            request_id,
            json,
        } => {
            let options = CreateOptions {
                sync,
                request_id: request_id.as_deref(),
                json,
            };
            handlers::create::execute(&ctx, &file, options).await?;
        }
        Commands::Get {
            payout_batch_id,
            json,
        } => {
            handlers::get::execute(&ctx, &payout_batch_id, json).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = run(cli, command).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}

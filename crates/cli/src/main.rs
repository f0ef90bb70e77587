use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rewear_cli::commands::{self, Cli, Command};
use rewear_cli::config::CliConfig;
use rewear_cli::error::CliResult;
use rewear_cli::open_catalog;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    // Logs go to stderr so stdout stays clean for --json output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rewear_cli=info,rewear_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(Some(output)) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Option<String>> {
    // --- Configuration ---
    let config = CliConfig::from_env()?;
    tracing::debug!(
        catalog = ?config.catalog_path,
        chest = config.viewer.chest,
        "Loaded configuration"
    );

    match &cli.command {
        Command::Browse(args) => {
            let store = open_catalog(&config, cli.catalog.as_deref())?;
            commands::browse(&store, &config.viewer, args, cli.json).map(Some)
        }
        Command::Item { id } => {
            let store = open_catalog(&config, cli.catalog.as_deref())?;
            commands::item(&store, &config.viewer, id, cli.json).map(Some)
        }
        Command::Ask { message } => {
            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            let watcher = tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Received Ctrl-C, cancelling reply");
                    on_interrupt.cancel();
                }
            });

            let result = commands::ask(&message.join(" "), &cancel, cli.json).await;
            watcher.abort();
            result
        }
        Command::Faq { query } => commands::faq(query.as_deref(), cli.json).map(Some),
    }
}

//! zoraauth binary entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use zoraauth::auth::TokioSleeper;
use zoraauth::cli::login::handle_login;
use zoraauth::cli::Cli;
use zoraauth::config::LoginConfig;
use zoraauth::error::LoginError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv(); // load .env if present, ignore error
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match LoginConfig::resolve(&cli, |key| std::env::var(key).ok()) {
        Ok(config) => handle_login(&config, Arc::new(TokioSleeper), &mut std::io::stdout())
            .await
            .map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if matches!(e, LoginError::Validation { .. }) {
            eprintln!("{}", Cli::command().render_usage());
        }
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use clap::Parser;
use mmsummary::{Cli, Config, app, ui};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install log subscriber: {e}");
    }

    let mut config = match Config::load_or_init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", ui::error("✗"));
            return ExitCode::FAILURE;
        }
    };
    config.apply_env_overrides();
    let locale = config.apply_locale();
    tracing::debug!(%locale, base_url = %config.server.base_url, "configuration loaded");

    match app::dispatch(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{} {}", ui::error("✗"), e.user_message());
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use eyre::Result;
use log::info;

use yt_tools::config::{PROJECT_NAME, Settings};
use yt_tools::routes::build_router;

mod cli;

use cli::Cli;

fn setup_logging(level: &str) {
    // RUST_LOG still wins when set; LOG_LEVEL only seeds the default.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(host) = cli.host {
        settings.host = host;
    }
    if let Some(port) = cli.port {
        settings.port = port;
    }
    if let Some(log_level) = cli.log_level {
        settings.log_level = log_level;
    }

    setup_logging(&settings.log_level);
    info!("Starting {PROJECT_NAME} on {}:{}", settings.host, settings.port);

    let app = build_router();
    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

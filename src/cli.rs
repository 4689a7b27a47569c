use clap::Parser;

#[derive(Parser)]
#[command(
    name = "yt-tools",
    about = "HTTP API for extracting YouTube video metadata, captions, and timestamps",
    version,
)]
pub struct Cli {
    /// Bind address (overrides the HOST environment variable)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,

    /// Log level (overrides the LOG_LEVEL environment variable)
    #[arg(long)]
    pub log_level: Option<String>,
}

mod cli;
mod config;
mod download;
mod encoding;
mod extension;
mod github;
mod http;
mod logger;
mod source;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    log::debug!("Starting");
    cli::run(cli).await
}

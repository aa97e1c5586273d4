//! Quake CLI - Command line tool for the USGS earthquake feed.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "quake-cli",
    version,
    about = "USGS earthquake feed toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: quake_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting quake-cli");
    quake_cmd::run(cli.command).await
}

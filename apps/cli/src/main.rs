//! coursegen command-line interface.

mod commands;

use clap::Parser;

use commands::Cli;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}

use anyhow::Result;
use clap::Parser;
use cvsscore::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score { vectors, format } => cvsscore::commands::score::run(vectors, format),
    }
}

use anyhow::Result;
use clap::Parser;

use scholar_site::cli::{Cli, Commands};
use scholar_site::commands::{run_build, run_list, run_metrics, run_render, run_sync};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync(args) => {
            run_sync(args)?;
        }
        Commands::List(args) => {
            run_list(args)?;
        }
        Commands::Render(args) => {
            run_render(args)?;
        }
        Commands::Build(args) => {
            run_build(args)?;
        }
        Commands::Metrics(args) => {
            run_metrics(args)?;
        }
    }

    Ok(())
}

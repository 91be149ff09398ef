//! WRM CLI - print the dashboard's simulated water data as JSON or CSV.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "wrm-cli",
    version,
    about = "Water Resource Management data toolkit"
)]
struct Cli {
    #[command(flatten)]
    options: wrm_cmd::GeneratorOptions,

    #[command(subcommand)]
    command: wrm_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Running {:?}", cli.command);
    wrm_cmd::run(&cli.options, cli.command)
}

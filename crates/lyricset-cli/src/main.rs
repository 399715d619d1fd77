mod commands;
mod dataset_args;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// lyricset: inspect and encode character-level lyrics datasets.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    pub logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging()?;

    args.command.run()
}

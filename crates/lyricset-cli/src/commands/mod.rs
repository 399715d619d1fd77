use crate::commands::{
    codec::{DecodeArgs, EncodeArgs},
    items::ItemsArgs,
    summary::SummaryArgs,
};

pub mod codec;
pub mod items;
pub mod summary;

/// Subcommands for lyricset.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load a dataset and print its summary.
    Summary(SummaryArgs),

    /// Write encoded dataset items.
    Items(ItemsArgs),

    /// Encode text lines to labels.
    Encode(EncodeArgs),

    /// Decode label lines to text.
    Decode(DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Summary(cmd) => cmd.run(),
            Commands::Items(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}

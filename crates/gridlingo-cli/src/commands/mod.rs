use crate::commands::{encode::EncodeArgs, paths::PathsArgs, vocab::VocabArgs};

pub mod encode;
pub mod paths;
pub mod vocab;

/// Subcommands for gridlingo
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode JSON-lines observations into tensor batches.
    Encode(EncodeArgs),

    /// Show the storage paths of a model.
    Paths(PathsArgs),

    /// List the vocabulary of a model.
    Vocab(VocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Paths(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
        }
    }
}

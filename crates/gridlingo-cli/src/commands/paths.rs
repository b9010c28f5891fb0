use std::io::Write;

use gridlingo::storage::GridlingoStorage;

use crate::{input_output::OutputArgs, storage_args::StorageArgs};

/// Args for the paths command.
#[derive(clap::Args, Debug)]
pub struct PathsArgs {
    /// Model name.
    #[arg(long)]
    pub model: String,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    storage: StorageArgs,
}

impl PathsArgs {
    /// Run the paths command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let storage = self.storage.init_storage()?;
        let mut writer = self.output.open_writer()?;

        write_paths(&mut writer, &storage, &self.model)?;
        writer.flush()?;
        Ok(())
    }
}

fn write_paths(
    writer: &mut dyn Write,
    storage: &GridlingoStorage,
    model: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(writer, "storage_dir\t{}", storage.storage_dir().display())?;
    writeln!(writer, "model_dir\t{}", storage.model_dir(model)?.display())?;
    writeln!(writer, "vocab_path\t{}", storage.vocab_path(model)?.display())?;
    Ok(())
}

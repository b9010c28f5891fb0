use std::io::Write;

use gridlingo::vocab::{BoundedVocabulary, VocabularyOptions};

use crate::{input_output::OutputArgs, storage_args::StorageArgs};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Model name.
    #[arg(long)]
    pub model: String,

    /// Vocabulary capacity to validate the persisted file against.
    #[arg(long, default_value_t = gridlingo::vocab::DEFAULT_VOCAB_CAPACITY)]
    pub capacity: usize,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    storage: StorageArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let storage = self.storage.init_storage()?;
        let vocab = BoundedVocabulary::for_model(
            &storage,
            &self.model,
            VocabularyOptions::default().with_capacity(self.capacity),
        )?;

        log::info!(
            "{}: {}/{} tokens",
            self.model,
            vocab.len(),
            vocab.capacity()
        );

        let mut writer = self.output.open_writer()?;
        write_vocab(&mut writer, &vocab)?;
        writer.flush()?;
        Ok(())
    }
}

fn write_vocab(
    writer: &mut dyn Write,
    vocab: &BoundedVocabulary,
) -> std::io::Result<()> {
    for (index, token) in vocab.iter() {
        writeln!(writer, "{index}\t{token}")?;
    }
    Ok(())
}

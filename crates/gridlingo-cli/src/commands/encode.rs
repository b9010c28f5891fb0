use std::{
    io::{BufRead, Write},
    num::NonZeroUsize,
};

use burn::{backend::NdArray, tensor::backend::Backend};
use gridlingo::format::{Observation, ObssPreprocessor, ObssPreprocessorConfig};

use crate::{
    input_output::{InputArgs, OutputArgs, read_json_lines, write_json_line},
    storage_args::StorageArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Model name.
    #[arg(long)]
    pub model: String,

    /// Observations per encoded batch.
    #[arg(long, default_value = "32")]
    pub batch_size: NonZeroUsize,

    /// Vocabulary capacity.
    #[arg(long, default_value_t = gridlingo::vocab::DEFAULT_VOCAB_CAPACITY)]
    pub capacity: usize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    storage: StorageArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let storage = self.storage.init_storage()?;
        let preproc: ObssPreprocessor<NdArray> = ObssPreprocessorConfig::new()
            .with_vocab_capacity(self.capacity)
            .init(&storage, &self.model)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let batches = run_encode(&mut reader, &mut writer, &preproc, self.batch_size.get())?;

        let vocab = preproc.vocab();
        log::info!(
            "encoded {batches} batches; {}: {}/{} tokens",
            self.model,
            vocab.len(),
            vocab.capacity()
        );
        Ok(())
    }
}

/// Encode JSON-lines observations in batches; returns the number of batches.
fn run_encode<B: Backend>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    preproc: &ObssPreprocessor<B>,
    batch_size: usize,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut batch = Vec::with_capacity(batch_size);
    let mut batches = 0;

    for obs in read_json_lines::<Observation>(reader) {
        batch.push(obs?);

        if batch.len() == batch_size {
            write_batch(writer, preproc, &batch)?;
            batch.clear();
            batches += 1;
        }
    }

    if !batch.is_empty() {
        write_batch(writer, preproc, &batch)?;
        batches += 1;
    }

    Ok(batches)
}

fn write_batch<B: Backend>(
    writer: &mut dyn Write,
    preproc: &ObssPreprocessor<B>,
    batch: &[Observation],
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = preproc.encode(batch, false)?;
    // Every token is known after `encode`; this only reads the vocabulary.
    let instrs = preproc.tokenize_batch(batch)?;

    write_json_line(
        writer,
        &serde_json::json!({
            "size": batch.len(),
            "image_dims": encoded.image_dims(),
            "instr_dims": encoded.instr_dims(),
            "instrs": instrs,
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use gridlingo::{GridlingoError, format::GridImage, storage::GridlingoStorage};
    use serde_json::{Value, json};
    use tempdir::TempDir;

    use super::*;

    fn jsonl(missions: &[&str]) -> String {
        missions
            .iter()
            .map(|m| {
                let obs = Observation::new(GridImage::zeros([7, 7, 3]), *m);
                serde_json::to_string(&obs).unwrap() + "\n"
            })
            .collect()
    }

    #[test]
    fn test_run_encode() {
        let tmp = TempDir::new("gridlingo_cli_encode").unwrap();
        let storage = GridlingoStorage::at(tmp.path());
        let preproc: ObssPreprocessor<NdArray> = ObssPreprocessorConfig::new()
            .init(&storage, "GoToDoor")
            .unwrap();

        let input = jsonl(&["go to the red ball", "open the door"])
            + "\n  \n"
            + &jsonl(&["go to the door"])
            + "\n";
        let mut reader = Cursor::new(input);
        let mut out: Vec<u8> = Vec::new();

        let batches = run_encode(&mut reader, &mut out, &preproc, 2).unwrap();
        assert_eq!(batches, 2);

        let records: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(
            records,
            vec![
                json!({
                    "size": 2,
                    "image_dims": [2, 147],
                    "instr_dims": [5, 2, 101],
                    "instrs": [[1, 2, 3, 4, 5], [6, 3, 7]],
                }),
                json!({
                    "size": 1,
                    "image_dims": [1, 147],
                    "instr_dims": [4, 1, 101],
                    "instrs": [[1, 2, 3, 7]],
                }),
            ]
        );

        assert!(storage.vocab_path("GoToDoor").unwrap().is_file());
    }

    #[test]
    fn test_run_encode_tokenless_mission() {
        let preproc: ObssPreprocessor<NdArray> = ObssPreprocessorConfig::new().init_with_vocab(
            gridlingo::vocab::BoundedVocabulary::in_memory(Default::default()),
        );

        let mut reader = Cursor::new(jsonl(&["", "42 !?"]));
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(run_encode(&mut reader, &mut out, &preproc, 1).unwrap(), 2);

        let records: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let empty = json!({
            "size": 1,
            "image_dims": [1, 147],
            "instr_dims": [0, 1, 101],
            "instrs": [[]],
        });
        assert_eq!(records, vec![empty.clone(), empty]);
        assert!(preproc.vocab().is_empty());
    }

    #[test]
    fn test_run_encode_capacity() {
        let tmp = TempDir::new("gridlingo_cli_capacity").unwrap();
        let preproc: ObssPreprocessor<NdArray> = ObssPreprocessorConfig::new()
            .with_vocab_capacity(3)
            .init(&GridlingoStorage::at(tmp.path()), "GoToDoor")
            .unwrap();

        let mut reader = Cursor::new(jsonl(&["go to the door"]));
        let err = run_encode(&mut reader, &mut Vec::<u8>::new(), &preproc, 8).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GridlingoError>(),
            Some(GridlingoError::CapacityExceeded { capacity: 3 })
        ));
        assert_eq!(preproc.vocab().len(), 3);
    }

    #[test]
    fn test_run_encode_bad_line() {
        let preproc: ObssPreprocessor<NdArray> = ObssPreprocessorConfig::new().init_with_vocab(
            gridlingo::vocab::BoundedVocabulary::in_memory(Default::default()),
        );

        let mut reader = Cursor::new("{\"mission\": \"go\"}\n");
        let err = run_encode(&mut reader, &mut Vec::<u8>::new(), &preproc, 1).unwrap_err();
        assert!(err.to_string().starts_with("line 1:"));
    }
}

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

type BoxError = Box<dyn std::error::Error>;

/// `None` for stdin/stdout; "-" names them explicitly.
fn file_path(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| *p != Path::new("-"))
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional JSON-lines observation file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, BoxError> {
        Ok(match file_path(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, BoxError> {
        Ok(match file_path(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Parse one JSON value per non-blank line.
///
/// Errors name the 1-based line they came from.
pub fn read_json_lines<'a, T: DeserializeOwned + 'a>(
    reader: &'a mut dyn BufRead,
) -> impl Iterator<Item = Result<T, BoxError>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(BoxError::from(e))),
            };
            if line.trim().is_empty() {
                return None;
            }
            Some(
                serde_json::from_str(&line)
                    .map_err(|e| BoxError::from(format!("line {}: {e}", idx + 1))),
            )
        })
}

/// Write `record` as a single JSON line, and flush.
pub fn write_json_line<T: Serialize>(
    writer: &mut dyn Write,
    record: &T,
) -> Result<(), BoxError> {
    serde_json::to_writer(&mut *writer, record)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

//! # Vocabulary JSON IO
//!
//! Vocabularies persist as a single JSON object of ``{ token: index }``:
//! ```json
//! {"go": 1, "to": 2, "the": 3, "red": 4, "ball": 5}
//! ```
//!
//! Indices must be exactly ``1..=n`` for `n` tokens. Writers emit entries
//! in index order.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Serialize, Serializer};

use crate::{
    errors::{GLResult, GridlingoError},
    types::TokenIndex,
};

/// Serializes an ordered token list as ``{ token: position + 1 }``.
struct IndexedTokens<'a>(&'a [String]);

impl Serialize for IndexedTokens<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .enumerate()
                .map(|(pos, token)| (token, pos + 1)),
        )
    }
}

/// Rebuild the ordered token list from a parsed JSON object.
///
/// ## Arguments
/// * `map` - the parsed ``{ token: index }`` object.
/// * `capacity` - the maximum number of tokens permitted.
///
/// ## Returns
/// Tokens ordered by index; or a description of why the map is malformed.
pub fn tokens_from_json_map(
    map: serde_json::Map<String, serde_json::Value>,
    capacity: usize,
) -> Result<Vec<String>, String> {
    let n = map.len();
    if n > capacity {
        return Err(format!("{n} tokens exceeds capacity {capacity}"));
    }

    let mut slots: Vec<Option<String>> = vec![None; n];
    for (token, value) in map {
        let index = value
            .as_u64()
            .and_then(|v| TokenIndex::try_from(v).ok())
            .ok_or_else(|| format!("index for {token:?} is not a positive integer: {value}"))?;

        if index == 0 || index > n {
            return Err(format!("index {index} for {token:?} outside 1..={n}"));
        }

        let slot = &mut slots[index - 1];
        if let Some(other) = slot {
            return Err(format!("index {index} assigned to both {other:?} and {token:?}"));
        }
        *slot = Some(token);
    }

    // n distinct indices in 1..=n; every slot is filled.
    Ok(slots.into_iter().flatten().collect())
}

/// Read an ordered token list from a JSON reader.
///
/// ## Arguments
/// * `reader` - the JSON source.
/// * `capacity` - the maximum number of tokens permitted.
pub fn read_vocab_json<R: Read>(
    reader: R,
    capacity: usize,
) -> Result<Vec<String>, String> {
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_reader(reader).map_err(|e| e.to_string())?;
    tokens_from_json_map(map, capacity)
}

/// Load an ordered token list from a JSON vocabulary file.
///
/// ## Errors
/// * [`GridlingoError::Io`] if the file cannot be opened.
/// * [`GridlingoError::MalformedPersistedState`] if it does not parse.
pub fn load_vocab_json_path<P: AsRef<Path>>(
    path: P,
    capacity: usize,
) -> GLResult<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    read_vocab_json(reader, capacity).map_err(|reason| GridlingoError::MalformedPersistedState {
        path: path.to_path_buf(),
        reason,
    })
}

/// Write an ordered token list as a JSON object.
pub fn write_vocab_json<W: Write>(
    tokens: &[String],
    writer: &mut W,
) -> GLResult<()> {
    serde_json::to_writer(&mut *writer, &IndexedTokens(tokens)).map_err(std::io::Error::from)?;
    writer.flush()?;
    Ok(())
}

/// Save an ordered token list to a JSON vocabulary file.
///
/// The file is rewritten in full; missing parent directories are created.
pub fn save_vocab_json_path<P: AsRef<Path>>(
    tokens: &[String],
    path: P,
) -> GLResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_json(tokens, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_write_in_index_order() {
        let mut buf = Vec::new();
        write_vocab_json(&tokens(&["red", "ball", "a"]), &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"{"red":1,"ball":2,"a":3}"#
        );
    }

    #[test]
    fn test_read_reorders_by_index() {
        let json = r#"{"b": 2, "c": 3, "a": 1}"#;
        assert_eq!(
            read_vocab_json(json.as_bytes(), 100).unwrap(),
            tokens(&["a", "b", "c"])
        );

        assert_eq!(read_vocab_json("{}".as_bytes(), 0).unwrap(), tokens(&[]));
    }

    #[test]
    fn test_read_rejects_malformed() {
        let cases = [
            "not json",
            "[1, 2, 3]",
            r#"{"a": "1"}"#,
            r#"{"a": -1}"#,
            r#"{"a": 1.5}"#,
            r#"{"a": 0}"#,
            r#"{"a": 1, "b": 3}"#,
            r#"{"a": 1, "b": 1}"#,
        ];
        for json in cases {
            assert!(
                read_vocab_json(json.as_bytes(), 100).is_err(),
                "accepted {json:?}"
            );
        }

        let err = read_vocab_json(r#"{"a": 1, "b": 2, "c": 3}"#.as_bytes(), 2).unwrap_err();
        assert!(err.contains("exceeds capacity"), "{err}");
    }

    #[test]
    fn test_save_load_path() {
        let words = tokens(&["go", "to", "the", "green", "key"]);

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("models").join("agent").join("vocab.json");

                save_vocab_json_path(&words, &path).expect("Failed to save vocab");
                let loaded = load_vocab_json_path(&path, 100).expect("Failed to load vocab");
                assert_eq!(&loaded, &words);

                std::fs::write(&path, "{\"go\": 2}")?;
                match load_vocab_json_path(&path, 100) {
                    Err(GridlingoError::MalformedPersistedState { path: p, .. }) => {
                        assert_eq!(p, path)
                    }
                    other => panic!("unexpected: {other:?}"),
                }

                Ok(())
            })
            .unwrap();
    }
}

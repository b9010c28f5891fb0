//! # Bounded ``{ token -> index }`` Vocabulary

use std::path::{Path, PathBuf};

use crate::{
    errors::{GLResult, GridlingoError},
    types::{GLHashMap, TokenIndex, hash_map_with_capacity},
    vocab::{VocabularyOptions, io},
};

/// A capacity-limited, lazily-growing ``{ token -> index }`` vocabulary.
///
/// Tokens receive indices in order of first appearance, starting at `1`;
/// index `0` is reserved for padding. Once assigned, an index never changes.
///
/// A vocabulary may be bound to a JSON file; novel tokens rewrite the whole
/// file (see [`VocabularyOptions::persist_on_insert`]).
#[derive(Debug)]
pub struct BoundedVocabulary {
    /// Backing file; `None` for in-memory vocabularies.
    path: Option<PathBuf>,

    options: VocabularyOptions,

    /// Tokens in index order; ``tokens[i]`` has index ``i + 1``.
    tokens: Vec<String>,

    index: GLHashMap<String, TokenIndex>,

    /// Whether there are inserts not yet persisted.
    dirty: bool,
}

impl BoundedVocabulary {
    /// Build an empty vocabulary which is never persisted.
    pub fn in_memory(options: VocabularyOptions) -> Self {
        Self {
            path: None,
            tokens: Vec::new(),
            index: hash_map_with_capacity(options.capacity),
            options,
            dirty: false,
        }
    }

    /// Load the vocabulary persisted at `path`; or start empty if there is none.
    ///
    /// Nothing is written until the first novel token.
    ///
    /// ## Errors
    /// * [`GridlingoError::MalformedPersistedState`] if the file exists but is
    ///   not a valid vocabulary for `options.capacity`.
    /// * [`GridlingoError::Io`] if the file exists but cannot be read.
    pub fn load<P: AsRef<Path>>(
        path: P,
        options: VocabularyOptions,
    ) -> GLResult<Self> {
        let path = path.as_ref().to_path_buf();

        let tokens = if path.exists() {
            io::load_vocab_json_path(&path, options.capacity)?
        } else {
            Vec::new()
        };

        let mut index = hash_map_with_capacity(options.capacity);
        index.extend(
            tokens
                .iter()
                .enumerate()
                .map(|(pos, token)| (token.clone(), pos + 1)),
        );

        log::info!(
            "loaded vocabulary {} ({}/{} tokens)",
            path.display(),
            tokens.len(),
            options.capacity
        );

        Ok(Self {
            path: Some(path),
            options,
            tokens,
            index,
            dirty: false,
        })
    }

    /// Load the vocabulary of a named model from a storage root.
    ///
    /// The vocabulary lives at ``<root>/models/<model_name>/vocab.json``.
    #[cfg(feature = "storage")]
    pub fn for_model(
        storage: &crate::storage::GridlingoStorage,
        model_name: &str,
        options: VocabularyOptions,
    ) -> GLResult<Self> {
        let path = storage
            .vocab_path(model_name)
            .map_err(|e| GridlingoError::Storage(e.to_string()))?;
        Self::load(path, options)
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The vocabulary options.
    pub fn options(&self) -> &VocabularyOptions {
        &self.options
    }

    /// The maximum number of tokens.
    pub fn capacity(&self) -> usize {
        self.options.capacity
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The number of tokens which may still be added.
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }

    /// Are there inserts which have not been persisted?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the index of `token`, if present; never inserts.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<TokenIndex> {
        self.index.get(token).copied()
    }

    /// Return the token with the given index, if any.
    pub fn token(
        &self,
        index: TokenIndex,
    ) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|pos| self.tokens.get(pos))
            .map(String::as_str)
    }

    /// Iterate over ``(index, token)`` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenIndex, &str)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(pos, token)| (pos + 1, token.as_str()))
    }

    /// Look up the index of `token`, assigning the next index if it is novel.
    ///
    /// The token is expected to be normalized already (see
    /// [`crate::format::tokenize`]).
    ///
    /// A novel token is assigned ``len() + 1`` and, under
    /// [`VocabularyOptions::persist_on_insert`], the full vocabulary is
    /// rewritten before returning.
    ///
    /// ## Errors
    /// * [`GridlingoError::CapacityExceeded`] if `token` is novel and the
    ///   vocabulary is full; the vocabulary is unchanged.
    /// * [`GridlingoError::Io`] if persisting fails; the token stays assigned
    ///   in memory.
    pub fn lookup(
        &mut self,
        token: &str,
    ) -> GLResult<TokenIndex> {
        if let Some(index) = self.get(token) {
            return Ok(index);
        }

        let capacity = self.capacity();
        if self.tokens.len() >= capacity {
            log::warn!("vocabulary full ({capacity}); rejecting token {token:?}");
            return Err(GridlingoError::CapacityExceeded { capacity });
        }

        let index = self.tokens.len() + 1;
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), index);
        self.dirty = true;
        log::debug!("vocabulary: {token:?} -> {index}");

        if self.options.persist_on_insert {
            self.persist()?;
        }

        Ok(index)
    }

    /// Rewrite the full vocabulary to its backing file.
    ///
    /// Creates missing parent directories. A no-op for in-memory vocabularies.
    pub fn persist(&mut self) -> GLResult<()> {
        if let Some(path) = &self.path {
            io::save_vocab_json_path(&self.tokens, path)?;
            log::trace!("persisted {} tokens to {}", self.tokens.len(), path.display());
        }
        self.dirty = false;
        Ok(())
    }
}

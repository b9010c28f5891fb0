//! # Preprocessor Config
// The `Config` derive generates undocumented builders.
#![allow(missing_docs)]

use burn::{config::Config, tensor::backend::Backend};

use crate::{
    errors::GLResult,
    format::ObssPreprocessor,
    vocab::{BoundedVocabulary, DEFAULT_VOCAB_CAPACITY, VocabularyOptions},
};

/// Flattened size of the default ``7 x 7 x 3`` grid view.
pub const DEFAULT_IMAGE_WIDTH: usize = 147;

/// Config for [`ObssPreprocessor`].
#[derive(Config, Debug)]
pub struct ObssPreprocessorConfig {
    /// Encode the image field.
    #[config(default = "true")]
    pub image: bool,

    /// The flattened width every image must have.
    #[config(default = "DEFAULT_IMAGE_WIDTH")]
    pub image_width: usize,

    /// Encode the instr (mission) field.
    #[config(default = "true")]
    pub instr: bool,

    /// The capacity of the mission vocabulary.
    #[config(default = "DEFAULT_VOCAB_CAPACITY")]
    pub vocab_capacity: usize,

    /// Rewrite the vocabulary file after every novel token.
    #[config(default = "true")]
    pub persist_on_insert: bool,
}

impl Default for ObssPreprocessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ObssPreprocessorConfig {
    /// The [`VocabularyOptions`] for this config.
    pub fn vocabulary_options(&self) -> VocabularyOptions {
        VocabularyOptions::default()
            .with_capacity(self.vocab_capacity)
            .with_persist_on_insert(self.persist_on_insert)
    }

    /// Build a preprocessor over the vocabulary of a named model.
    ///
    /// Loads ``<root>/models/<model_name>/vocab.json``, if present.
    #[cfg(feature = "storage")]
    pub fn init<B: Backend>(
        &self,
        storage: &crate::storage::GridlingoStorage,
        model_name: &str,
    ) -> GLResult<ObssPreprocessor<B>> {
        let vocab = BoundedVocabulary::for_model(storage, model_name, self.vocabulary_options())?;
        Ok(self.init_with_vocab(vocab))
    }

    /// Build a preprocessor over the vocabulary persisted at `path`.
    pub fn init_with_path<B: Backend, P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> GLResult<ObssPreprocessor<B>> {
        let vocab = BoundedVocabulary::load(path, self.vocabulary_options())?;
        Ok(self.init_with_vocab(vocab))
    }

    /// Build a preprocessor over an existing vocabulary.
    ///
    /// The instr width follows ``vocab.capacity()``, not ``self.vocab_capacity``.
    pub fn init_with_vocab<B: Backend>(
        &self,
        vocab: BoundedVocabulary,
    ) -> ObssPreprocessor<B> {
        ObssPreprocessor::new(self.image.then_some(self.image_width), self.instr, vocab)
    }
}

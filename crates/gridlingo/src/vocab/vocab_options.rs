//! # Vocabulary Options

/// The default maximum number of tokens in a [`BoundedVocabulary`](super::BoundedVocabulary).
pub const DEFAULT_VOCAB_CAPACITY: usize = 100;

/// Options for [`BoundedVocabulary`](super::BoundedVocabulary).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyOptions {
    /// The maximum number of distinct tokens.
    pub capacity: usize,

    /// Rewrite the persisted vocabulary after every novel token.
    ///
    /// When `false`, writes are deferred until
    /// [`BoundedVocabulary::persist`](super::BoundedVocabulary::persist).
    pub persist_on_insert: bool,
}

impl Default for VocabularyOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_VOCAB_CAPACITY,
            persist_on_insert: true,
        }
    }
}

impl VocabularyOptions {
    /// Set the capacity.
    pub fn with_capacity(
        mut self,
        capacity: usize,
    ) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the persist-on-insert policy.
    pub fn with_persist_on_insert(
        mut self,
        persist_on_insert: bool,
    ) -> Self {
        self.persist_on_insert = persist_on_insert;
        self
    }
}

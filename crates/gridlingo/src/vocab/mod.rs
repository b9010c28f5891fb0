//! # Vocabulary
//!
//! This module provides the bounded mission vocabulary and its io mechanisms.
//!
//! [`BoundedVocabulary`] maps mission tokens to indices ``1..=capacity``,
//! assigned lazily in order of first appearance, and persisted as JSON
//! (see [`io`]) under a model's storage directory.
//!
//! ```rust,no_run
//! use gridlingo::storage::GridlingoStorage;
//! use gridlingo::vocab::{BoundedVocabulary, VocabularyOptions};
//!
//! fn example() -> gridlingo::GLResult<()> {
//!     let storage = GridlingoStorage::at("storage");
//!     let mut vocab =
//!         BoundedVocabulary::for_model(&storage, "GoToRedBall", VocabularyOptions::default())?;
//!
//!     assert_eq!(vocab.lookup("go")?, vocab.lookup("go")?);
//!     Ok(())
//! }
//! ```
pub mod bounded_vocab;
pub mod io;
pub mod vocab_options;

#[doc(inline)]
pub use bounded_vocab::BoundedVocabulary;
#[doc(inline)]
pub use vocab_options::{DEFAULT_VOCAB_CAPACITY, VocabularyOptions};

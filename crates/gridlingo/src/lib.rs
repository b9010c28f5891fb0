//! # `gridlingo` Observation Preprocessing
//!
//! Turns grid-world observations (a small integer grid plus a natural
//! language mission) into batched model input tensors.
//!
//! See:
//! * [`format`] to tokenize missions and encode observation batches.
//! * [`vocab`] to manage the bounded, persisted mission vocabulary.
//! * [`storage`] to locate per-model storage directories.
//!
//! Missions are lowercased and split into ``[a-z]+`` tokens; each novel
//! token is assigned the next free index in the model's vocabulary, and
//! the vocabulary is rewritten to ``<storage>/models/<model>/vocab.json``.
//!
//! ```rust,no_run
//! use burn::backend::NdArray;
//! use gridlingo::format::{GridImage, Observation, ObssPreprocessor, ObssPreprocessorConfig};
//! use gridlingo::storage::{GridlingoStorage, GridlingoStorageOptions};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = GridlingoStorage::new(GridlingoStorageOptions::default())?;
//!     let preproc: ObssPreprocessor<NdArray> =
//!         ObssPreprocessorConfig::new().init(&storage, "GoToRedBall")?;
//!
//!     let batch = preproc.encode(
//!         &[Observation::new(GridImage::zeros([7, 7, 3]), "pick up the blue key")],
//!         false,
//!     )?;
//!     assert_eq!(batch.image_dims(), Some([1, 147]));
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "storage")]
#[doc(inline)]
pub use gridlingo_storage as storage;

pub mod errors;
pub mod format;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{GLResult, GridlingoError};

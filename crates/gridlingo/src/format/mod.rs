//! # Observation Formatting
//!
//! Turns raw environment [`Observation`]s into model input tensors:
//! * ``image`` - each ``[h, w, c]`` grid flattened, row-major, into ``[batch, image_width]``.
//! * ``instr`` - each mission [`tokenize`]d, mapped through the model's
//!   [`BoundedVocabulary`](crate::vocab::BoundedVocabulary), and one-hot
//!   encoded time-major into ``[max_instr_len, batch, instr_width]``.
//!
//! ```rust,no_run
//! use burn::backend::NdArray;
//! use gridlingo::format::{GridImage, Observation, ObssPreprocessor, ObssPreprocessorConfig};
//! use gridlingo::storage::GridlingoStorage;
//!
//! fn example() -> gridlingo::GLResult<()> {
//!     let storage = GridlingoStorage::at("storage");
//!     let preproc: ObssPreprocessor<NdArray> =
//!         ObssPreprocessorConfig::new().init(&storage, "GoToRedBall")?;
//!
//!     let obs = Observation::new(GridImage::zeros([7, 7, 3]), "go to the red ball");
//!     let batch = preproc.encode(&[obs], false)?;
//!     assert_eq!(batch.instr_dims(), Some([5, 1, 101]));
//!     Ok(())
//! }
//! ```
mod encoded_batch;
mod mission_tokens;
mod observation;
mod preprocessor;
mod preprocessor_config;

#[doc(inline)]
pub use encoded_batch::EncodedBatch;
#[doc(inline)]
pub use mission_tokens::{MISSION_TOKEN_PATTERN, tokenize};
#[doc(inline)]
pub use observation::{GridImage, NestedGrid, Observation};
#[doc(inline)]
pub use preprocessor::ObssPreprocessor;
#[doc(inline)]
pub use preprocessor_config::{DEFAULT_IMAGE_WIDTH, ObssPreprocessorConfig};

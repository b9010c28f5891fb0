//! # gridlingo-storage
//!
//! Resolves the model-storage root, and the per-model paths beneath it:
//!
//! ```terminaloutput
//! <storage_root>/models/<model_name>/vocab.json
//! ```
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod path_resolver;
pub mod path_utils;
pub mod storage;

pub use storage::{GridlingoStorage, GridlingoStorageOptions};

/// Environment variable key to override the default storage directory.
pub const GRIDLINGO_STORAGE_DIR: &str = "GRIDLINGO_STORAGE_DIR";

/// Default [`PathResolver`] for gridlingo.
pub const GRIDLINGO_STORAGE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.gridlingo",
    organization: "",
    application: "gridlingo",
    storage_env_vars: &[GRIDLINGO_STORAGE_DIR],
};

/// Directory under the storage root holding one sub-directory per model.
pub const MODELS_DIR: &str = "models";

/// File name of a model's persisted vocabulary.
pub const VOCAB_FILE_NAME: &str = "vocab.json";

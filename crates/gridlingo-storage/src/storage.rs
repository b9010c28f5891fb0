//! # Gridlingo Model Storage

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{GRIDLINGO_STORAGE_CONFIG, MODELS_DIR, VOCAB_FILE_NAME, path_utils};

/// Options for [`GridlingoStorage`].
#[derive(Clone, Default, Debug)]
pub struct GridlingoStorageOptions {
    /// Optional path to the storage directory.
    pub storage_dir: Option<PathBuf>,
}

impl GridlingoStorageOptions {
    /// Set the storage directory.
    pub fn with_storage_dir<P: AsRef<Path>>(
        mut self,
        storage_dir: Option<P>,
    ) -> Self {
        self.storage_dir = storage_dir.map(|p| p.as_ref().to_path_buf());
        self
    }
}

/// Storage root for trained models and their vocabularies.
///
/// Leverages [`PathResolver`](`crate::path_resolver::PathResolver`) for
/// resolving a storage root appropriate for a user/system combo,
/// and any environment overrides.
///
/// Resolution never creates directories; writers create what they need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridlingoStorage {
    storage_dir: PathBuf,
}

impl GridlingoStorage {
    /// Construct a new [`GridlingoStorage`].
    pub fn new(options: GridlingoStorageOptions) -> anyhow::Result<Self> {
        let storage_dir = GRIDLINGO_STORAGE_CONFIG
            .resolve_storage_dir(options.storage_dir)
            .context("failed to resolve storage directory")?;

        log::debug!("storage root: {}", storage_dir.display());

        Ok(Self { storage_dir })
    }

    /// Construct a [`GridlingoStorage`] rooted at an explicit directory.
    pub fn at<P: AsRef<Path>>(storage_dir: P) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the storage directory.
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Get the path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.storage_dir` and `file`.
    /// * `file` - the final file name.
    pub fn storage_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.storage_dir, context, file)
    }

    /// Get the directory for a named model: ``<root>/models/<model_name>``.
    ///
    /// # Errors
    /// If `model_name` is not a single plain path component.
    pub fn model_dir(
        &self,
        model_name: &str,
    ) -> anyhow::Result<PathBuf> {
        path_utils::check_model_name(model_name)?;
        Ok(self.storage_path(&[MODELS_DIR], model_name))
    }

    /// Get the vocabulary path for a named model:
    /// ``<root>/models/<model_name>/vocab.json``.
    ///
    /// # Errors
    /// If `model_name` is not a single plain path component.
    pub fn vocab_path(
        &self,
        model_name: &str,
    ) -> anyhow::Result<PathBuf> {
        path_utils::check_model_name(model_name)?;
        Ok(self.storage_path(&[MODELS_DIR, model_name], VOCAB_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use serial_test::serial;

    use crate::{
        GRIDLINGO_STORAGE_CONFIG,
        GRIDLINGO_STORAGE_DIR,
        storage::{GridlingoStorage, GridlingoStorageOptions},
    };

    #[test]
    #[serial]
    fn test_resolve_storage_dir() {
        let orig_storage_dir = env::var(GRIDLINGO_STORAGE_DIR);

        let pds = GRIDLINGO_STORAGE_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let user_dir = PathBuf::from("/tmp/gridlingo/storage");
        let env_dir = PathBuf::from("/tmp/gridlingo/env_storage");

        // No env vars
        unsafe {
            env::remove_var(GRIDLINGO_STORAGE_DIR);
        }

        let storage = GridlingoStorage::new(
            GridlingoStorageOptions::default().with_storage_dir(Some(user_dir.clone())),
        )
        .unwrap();
        assert_eq!(storage.storage_dir(), user_dir.as_path());

        let storage = GridlingoStorage::new(GridlingoStorageOptions::default()).unwrap();
        assert_eq!(storage.storage_dir(), pds.data_dir());

        // With env var.
        unsafe {
            env::set_var(GRIDLINGO_STORAGE_DIR, env_dir.to_str().unwrap());
        }

        let storage = GridlingoStorage::new(
            GridlingoStorageOptions::default().with_storage_dir(Some(user_dir.clone())),
        )
        .unwrap();
        assert_eq!(storage.storage_dir(), user_dir.as_path());

        let storage = GridlingoStorage::new(GridlingoStorageOptions::default()).unwrap();
        assert_eq!(storage.storage_dir(), env_dir.as_path());

        // restore original env var.
        match orig_storage_dir {
            Ok(original) => unsafe { env::set_var(GRIDLINGO_STORAGE_DIR, original) },
            Err(_) => unsafe { env::remove_var(GRIDLINGO_STORAGE_DIR) },
        }
    }

    #[test]
    fn test_model_paths() {
        let storage = GridlingoStorage::at("/tmp/gridlingo");

        assert_eq!(
            storage.model_dir("GoToDoor").unwrap(),
            PathBuf::from("/tmp/gridlingo/models/GoToDoor")
        );
        assert_eq!(
            storage.vocab_path("GoToDoor").unwrap(),
            PathBuf::from("/tmp/gridlingo/models/GoToDoor/vocab.json")
        );

        assert!(storage.vocab_path("../escape").is_err());
        assert!(storage.model_dir("").is_err());
    }

    #[test]
    fn test_storage_path() {
        let storage = GridlingoStorage::at("/tmp/gridlingo");
        let path = storage.storage_path(&["prefix"], "file.txt");
        assert_eq!(path, storage.storage_dir.join("prefix").join("file.txt"));
    }
}

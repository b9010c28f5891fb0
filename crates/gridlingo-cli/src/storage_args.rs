use gridlingo::storage::{GridlingoStorage, GridlingoStorageOptions};

/// Model storage argument group.
#[derive(clap::Args, Debug)]
pub struct StorageArgs {
    /// Storage root directory.
    #[arg(long, default_value = None)]
    storage_dir: Option<String>,
}

impl StorageArgs {
    /// Resolve the model storage.
    pub fn init_storage(&self) -> Result<GridlingoStorage, Box<dyn std::error::Error>> {
        let mut options = GridlingoStorageOptions::default();

        if let Some(storage_dir) = &self.storage_dir {
            options = options.with_storage_dir(Some(storage_dir.clone()));
        }

        Ok(GridlingoStorage::new(options)?)
    }
}

//! # Storage Path Resolver
//!
//! Static library defaults for storage directory resolution.

use directories_next::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Static configuration for storage path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for storage directory environment variables.
    pub storage_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.organization, self.application, self.qualifier)
    }

    /// Resolve the storage directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.storage_env_vars`; in order.
    ///    Empty values are skipped.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    ///
    /// ## Project Dirs Behavior
    ///
    /// |Platform | Value                                                                      | Example                                                       |
    /// | ------- | -------------------------------------------------------------------------- | ------------------------------------------------------------- |
    /// | Linux   | `$XDG_DATA_HOME`/`_project_path_` or `$HOME`/.local/share/`_project_path_` | /home/alice/.local/share/barapp                               |
    /// | macOS   | `$HOME`/Library/Application Support/`_project_path_`                       | /Users/Alice/Library/Application Support/com.Foo-Corp.Bar-App |
    /// | Windows | `{FOLDERID_LocalAppData}`\\`_project_path_`\\data                          | C:\Users\Alice\AppData\Local\Foo Corp\Bar App\data            |
    pub fn resolve_storage_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.storage_env_vars {
            if let Ok(path) = env::var(env_var)
                && !path.is_empty()
            {
                return Some(PathBuf::from(path));
            }
        }

        self.project_dirs()
            .map(|pds| pds.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const STORAGE_ENV1: &str = "_GRIDLINGO_STORAGE_ENV1";
    const STORAGE_ENV2: &str = "_GRIDLINGO_STORAGE_ENV2";

    const TEST_CONFIG: PathResolver = PathResolver {
        qualifier: "io",
        organization: "crates",
        application: "example",
        storage_env_vars: &[STORAGE_ENV1, STORAGE_ENV2],
    };

    #[test]
    #[serial]
    fn test_resolve_storage_dir() {
        let pds = TEST_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let no_path: Option<PathBuf> = None;

        let user_dir = PathBuf::from("/tmp/gridlingo/user");
        let env_dir1 = PathBuf::from("/tmp/gridlingo/env.1");
        let env_dir2 = PathBuf::from("/tmp/gridlingo/env.2");

        unsafe {
            for v in TEST_CONFIG.storage_env_vars {
                env::remove_var(v);
            }
        }

        assert_eq!(
            TEST_CONFIG.resolve_storage_dir(Some(user_dir.clone())),
            Some(user_dir.clone()),
        );
        assert_eq!(
            TEST_CONFIG.resolve_storage_dir(no_path.clone()),
            Some(pds.data_dir().to_path_buf())
        );

        // Lowest priority env var.
        unsafe {
            env::set_var(STORAGE_ENV2, env_dir2.to_str().unwrap());
        }
        assert_eq!(
            TEST_CONFIG.resolve_storage_dir(Some(user_dir.clone())),
            Some(user_dir.clone()),
        );
        assert_eq!(
            TEST_CONFIG.resolve_storage_dir(no_path.clone()),
            Some(env_dir2.clone())
        );

        // Higher priority env var; an empty value does not count.
        unsafe {
            env::set_var(STORAGE_ENV1, "");
        }
        assert_eq!(
            TEST_CONFIG.resolve_storage_dir(no_path.clone()),
            Some(env_dir2.clone())
        );

        unsafe {
            env::set_var(STORAGE_ENV1, env_dir1.to_str().unwrap());
        }
        assert_eq!(
            TEST_CONFIG.resolve_storage_dir(no_path.clone()),
            Some(env_dir1.clone())
        );

        unsafe {
            for v in TEST_CONFIG.storage_env_vars {
                env::remove_var(v);
            }
        }
    }
}

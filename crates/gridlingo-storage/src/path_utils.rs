//! # Path Utilities

use std::path::{Component, Path, PathBuf};

/// Extend a path with a context and filename.
///
/// * Does not check that the path exists.
/// * Does not initialize the containing directories.
///
/// # Arguments
/// * `path` - the base directory.
/// * `context` - prefix dirs, inserted between `path` and `filename`.
/// * `filename` - the final file name.
pub fn extend_path<P, S, F>(
    path: P,
    context: &[S],
    filename: F,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = path.as_ref().to_path_buf();
    path.extend(context.iter().map(|s| s.as_ref()));
    path.push(filename.as_ref());
    path
}

/// Check that a model name is usable as a single directory component.
///
/// Model names become ``models/<name>/``; so names which are empty,
/// absolute, or contain separators or ``..`` are rejected.
pub fn check_model_name(name: &str) -> anyhow::Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => anyhow::bail!("invalid model name: {name:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_path() {
        let path = extend_path("/tmp/storage", &["models", "agent"], "vocab.json");
        assert_eq!(path, PathBuf::from("/tmp/storage/models/agent/vocab.json"));
    }

    #[test]
    fn test_check_model_name() {
        assert!(check_model_name("BabyAI-GoToRedBall-v0").is_ok());
        assert!(check_model_name("agent_7").is_ok());

        assert!(check_model_name("").is_err());
        assert!(check_model_name("..").is_err());
        assert!(check_model_name(".").is_err());
        assert!(check_model_name("a/b").is_err());
        assert!(check_model_name("/abs").is_err());
        assert!(check_model_name("agent/").is_err());
    }
}

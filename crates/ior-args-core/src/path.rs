use crate::config::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Resolve the config file path based on priority:
/// 1. Explicit path (--config flag, with tilde expansion)
/// 2. IOR_ARGS_CONFIG environment variable (with tilde expansion)
/// 3. `ior-args.toml` in the results root, if it exists
///
/// Returns None when nothing applies; callers fall back to built-in defaults.
pub fn resolve_config_path(explicit_path: Option<&str>, results_root: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
        && !env_path.is_empty()
    {
        return Some(expand_tilde(&env_path));
    }

    let local = results_root.join(CONFIG_FILE_NAME);
    local.is_file().then_some(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/results"), PathBuf::from("/tmp/results"));
        assert_eq!(expand_tilde("results/~x"), PathBuf::from("results/~x"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/ior.toml"), home.join("ior.toml"));
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let resolved = resolve_config_path(Some("/etc/ior-args.toml"), Path::new("/nonexistent"));
        assert_eq!(resolved, Some(PathBuf::from("/etc/ior-args.toml")));
    }
}

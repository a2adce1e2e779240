//! Centralized path management for the Votelytics CLI
//!
//! Keeps cache and config locations consistent across commands.

use std::path::PathBuf;

/// The application directory name used across all platforms
const APP_DIR: &str = "votelytics";

/// Returns the cache directory for the persistent cache store
///
/// `~/.cache/votelytics` on Linux, the platform cache directory elsewhere,
/// with a relative fallback if no standard directory can be determined.
pub fn get_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".votelytics/cache"))
}

/// Returns the configuration directory
///
/// `~/.config/votelytics` on Linux following XDG conventions.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".votelytics"))
}

/// Returns the path to the configuration file
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_paths_use_the_app_dir() {
        for (name, path) in [
            ("cache", get_cache_dir()),
            ("config", get_config_dir()),
        ] {
            assert!(
                path.to_string_lossy().contains(APP_DIR),
                "{} path should contain '{}': {}",
                name,
                APP_DIR,
                path.display()
            );
        }
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let config_path = get_config_path();
        assert!(config_path.starts_with(get_config_dir()));
        assert_eq!(
            config_path.file_name().and_then(|n| n.to_str()),
            Some("config.toml")
        );
    }
}

//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CRAFTHUB_DATA_DIR";

/// Resolve the Crafthub data directory.
///
/// Priority: `$CRAFTHUB_DATA_DIR`, then `~/.crafthub`, then `./.crafthub`.
pub fn resolve_data_dir() -> PathBuf {
    resolve_data_dir_from(std::env::var(DATA_DIR_ENV).ok(), dirs::home_dir())
}

fn resolve_data_dir_from(env_dir: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".crafthub");
    }

    PathBuf::from(".crafthub")
}

//! Assistant configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.crafthub/` in
//! production) and deserializes it into [`AssistantConfig`]. Falls back to
//! defaults when the file is missing, malformed, or fails validation.

use std::path::Path;

use crafthub_types::config::AssistantConfig;

/// Load the assistant configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`AssistantConfig::default()`].
/// - Unreadable, unparsable, or invalid file: logs a warning and returns the default.
/// - Otherwise: the parsed config.
pub async fn load_assistant_config(data_dir: &Path) -> AssistantConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AssistantConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AssistantConfig::default();
        }
    };

    let config = match toml::from_str::<AssistantConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            return AssistantConfig::default();
        }
    };

    if let Err(err) = config.validate() {
        tracing::warn!("Invalid {}: {err}, using defaults", config_path.display());
        return AssistantConfig::default();
    }

    config
}

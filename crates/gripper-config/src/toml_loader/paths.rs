//! Where the config file lives, and seeding it on first run.

use gripper_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "gripper";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/gripper/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn io_failure(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {err}", path.display()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_failure("create config directory", dir, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| io_failure("write default config to", path, e))?;

    info!(path = %path.display(), "seeded default config");
    Ok(())
}

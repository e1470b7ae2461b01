//! Locating, reading and validating `mfpga.toml`.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::{Path, PathBuf};

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "mfpga.toml";

/// Walks up from `start` to the nearest directory containing `mfpga.toml`.
pub fn find_config(start: &Path) -> Result<PathBuf, ConfigError> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::NotFound {
            file: CONFIG_FILE_NAME,
            start: start.display().to_string(),
        })
}

/// Loads and validates `<project_dir>/mfpga.toml`.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(project_dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Parses and validates configuration text.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.case.name.is_empty() {
        return Err(ConfigError::MissingField("case.name".to_string()));
    }
    if config.case.dir.is_empty() {
        return Err(ConfigError::MissingField("case.dir".to_string()));
    }
    Ok(())
}

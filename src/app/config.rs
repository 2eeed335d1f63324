use crate::app::error::ContextError;
use crate::app::models::Config;
use std::fs;
use std::path::Path;

/// Reads and validates the configuration file. Every failure here is fatal.
pub fn load_config(path: &Path) -> Result<Config, ContextError> {
    let content = fs::read_to_string(path).map_err(|source| ContextError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&content).map_err(|source| ContextError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.output.as_os_str().is_empty() {
        return Err(ContextError::ConfigValidation);
    }

    log::debug!(
        "Loaded {}: {} file(s), {} dir(s), output {}",
        path.display(),
        config.files.len(),
        config.dirs.len(),
        config.output.display()
    );

    Ok(config)
}

fn parse_config(content: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(content)
}

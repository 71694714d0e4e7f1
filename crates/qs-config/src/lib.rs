//! qs-config: Settings persistence for quickstrip.
//!
//! One small JSON blob, loaded once at startup. Loading never fails from the
//! caller's point of view: a missing or corrupt file yields the defaults,
//! which are immediately written back so the player finds an editable file
//! on disk. Saving is best-effort; callers swallow the result.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use thiserror::Error;

use qs_core::config::ModConfig;

/// File name of the settings blob.
pub const CONFIG_FILENAME: &str = "quickstrip.json";

/// Config persistence errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load the settings from a file, sanitizing value ranges.
pub fn load(path: impl AsRef<Path>) -> Result<ModConfig, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: ModConfig = serde_json::from_reader(reader)?;
    Ok(config.sanitized())
}

/// Save the settings to a file, creating parent directories as needed.
pub fn save(config: &ModConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, config)?;
    Ok(())
}

/// Load the settings, substituting and persisting the defaults when the
/// file is missing or unreadable. The write-back also refreshes the file of
/// a successful load, keeping hand-edited files schema-complete.
pub fn load_or_default(path: impl AsRef<Path>) -> ModConfig {
    let config = load(&path).unwrap_or_default();
    save(&config, &path).ok();
    config
}

/// Default location of the settings file, under the user config directory.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("quickstrip");
    path.push(CONFIG_FILENAME);
    path
}

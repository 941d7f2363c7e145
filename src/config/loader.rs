use std::path::Path;

use crate::error::{BibStatsError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config_semantics;

/// Name of the optional configuration file next to the executable.
pub const CONFIG_FILE_NAME: &str = "bibstats.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `bibstats.toml` from `dir`, or defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed, or validated.
    fn load_from_dir(&self, dir: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration through a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_from_dir(&self, dir: &Path) -> Result<Config> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !self.fs.exists(&path) {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| BibStatsError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

/// Parse and validate TOML configuration text.
///
/// # Errors
/// Returns an error if the TOML is malformed, has unknown keys, or fails validation.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config_semantics(&config)?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

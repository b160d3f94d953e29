//! Runtime configuration.
//!
//! Values come from the process environment and fall back to the layout of
//! an extracted game data archive. The binary loads `.env` into the
//! environment at startup.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Directory holding the extracted `.txt` tables.
pub const DEFAULT_DATA_DIR: &str = "data/global/excel";

/// File name of the automagic table inside the data directory.
pub const DEFAULT_AUTOMAGIC_FILE: &str = "automagic.txt";

const DATA_DIR_VAR: &str = "DATADICT_DATA_DIR";
const AUTOMAGIC_FILE_VAR: &str = "DATADICT_AUTOMAGIC_FILE";

/// Where the data tables live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub automagic_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            automagic_file: DEFAULT_AUTOMAGIC_FILE.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand if `.env` values should apply.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(dir) = read_var(DATA_DIR_VAR)? {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = read_var(AUTOMAGIC_FILE_VAR)? {
            config.automagic_file = file;
        }
        Ok(config)
    }

    /// Override the data directory.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Full path of the automagic table.
    pub fn automagic_path(&self) -> PathBuf {
        self.data_dir.join(&self.automagic_file)
    }
}

fn read_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar(name)),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(
            config.automagic_path(),
            Path::new("data/global/excel/automagic.txt")
        );
    }

    #[test]
    fn test_with_data_dir() {
        let config = Config::default().with_data_dir("/tmp/excel");
        assert_eq!(config.automagic_path(), Path::new("/tmp/excel/automagic.txt"));
    }

    #[test]
    fn test_from_env_without_vars_uses_defaults() {
        if env::var_os(DATA_DIR_VAR).is_some() || env::var_os(AUTOMAGIC_FILE_VAR).is_some() {
            return;
        }
        assert_eq!(Config::from_env().unwrap(), Config::default());
    }
}

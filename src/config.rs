use std::fs::OpenOptions;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;

/// Defaults applied when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub template: Option<String>,
    pub count: usize,
    pub seed: Option<u64>,
    pub copy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: None,
            count: 1,
            seed: None,
            copy: false,
        }
    }
}

impl Config {
    const APP_DIR: &str = "glyphgen";
    const FILE_NAME: &str = "config.json";

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

        Ok(base.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = match OpenOptions::new().read(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");

        Ok(config)
    }

    /// Loads from `path` when given, else from the platform config directory.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Ok(path) => Self::load(&path),
                Err(ConfigError::NoConfigDir) => Ok(Self::default()),
                Err(e) => Err(e),
            },
        }
    }
}

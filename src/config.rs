use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::GameError;

pub const DEFAULT_LEVEL_EXTENSION: &str = "txt";
pub const DEFAULT_LOG_FILE: &str = "sokoban.log";
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub map_directory: Option<PathBuf>,
    /// Extension, without the dot, that marks a file in the map directory as a level.
    pub level_extension: String,
    pub log_file: PathBuf,
    pub tick_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            map_directory: None,
            level_extension: DEFAULT_LEVEL_EXTENSION.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] GameError),
    #[error("config file {path} is not valid json: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineConfig {
    /// Reads a json config. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<EngineConfig, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(EngineConfig::default());
            }
            Err(err) => return Err(GameError::io(path, err).into()),
        };
        EngineConfig::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<EngineConfig, serde_json::Error> {
        serde_json::from_str(text)
    }
}

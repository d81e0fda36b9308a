use serde::{Deserialize, Serialize};
use std::{io, path::Path};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "./json-helpers.toml";

/// A filesystem-based configuration store for the command line front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Append a newline after printed JSON. The library printer never does.
    pub trailing_newline: bool,
}

#[derive(Debug, Error)]
pub enum ConfigLoadSaveError {
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Config {
    /// Load a configuration file from the filesystem
    pub async fn load(path: &Path) -> Result<Self, ConfigLoadSaveError> {
        let file = tokio::fs::read_to_string(path).await?;
        let config = toml::from_str(&file)?;
        Ok(config)
    }

    /// Load a configuration file, falling back to the defaults if there is none
    pub async fn load_or_default(path: &Path) -> Result<Self, ConfigLoadSaveError> {
        match Self::load(path).await {
            Err(ConfigLoadSaveError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save the current configuration as a file to the filesystem
    pub async fn save(&self, path: &Path) -> Result<(), ConfigLoadSaveError> {
        let file = toml::to_string(&self)?;
        tokio::fs::write(path, file).await?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}

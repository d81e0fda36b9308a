use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::io::AsyncReadExt;

/// Why a JSON file could not be loaded. Every variant carries the path that
/// was attempted and chains the underlying cause as its `source()`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON, invalid UTF-8, or a shape that doesn't match the
    /// target type
    #[error("failed to parse JSON from file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    Open,
    Read,
    Parse,
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Open { .. } => LoadErrorKind::Open,
            Self::Read { .. } => LoadErrorKind::Read,
            Self::Parse { .. } => LoadErrorKind::Parse,
        }
    }
}

/// Read a JSON file and decode it into `T`.
///
/// Keys are matched to `T`'s fields (or their serde renames) exactly and
/// case-sensitively. The file handle is closed before this returns, whichever
/// way it returns.
pub fn load_json<T, P>(path: P) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading json file");

    let data = {
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        data
    };
    tracing::trace!(path = %path.display(), bytes = data.len(), "read json file");

    decode(path, &data)
}

/// Like [`load_json`], but always hands back a value: `T::default()` paired
/// with the error when loading fails.
pub fn load_json_or_default<T, P>(path: P) -> (T, Option<LoadError>)
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    match load_json(path) {
        Ok(value) => (value, None),
        Err(err) => (T::default(), Some(err)),
    }
}

/// Async version of [`load_json`] on top of `tokio::fs`.
pub async fn load_json_async<T, P>(path: P) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading json file");

    let data = {
        let mut file = tokio::fs::File::open(path)
            .await
            .map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .await
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        data
    };
    tracing::trace!(path = %path.display(), bytes = data.len(), "read json file");

    decode(path, &data)
}

fn decode<T: DeserializeOwned>(path: &Path, data: &[u8]) -> Result<T, LoadError> {
    serde_json::from_slice(data).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

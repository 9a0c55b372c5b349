//! Error handling for the lyric-combine application
//!
//! Input and output failures during a combine run are recovered where they
//! happen and only counted; the errors that reach `main` are setup failures
//! (configuration, standard input).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombineError {
    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("Error opening {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error saving to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CombineError>;

impl From<std::io::Error> for CombineError {
    fn from(err: std::io::Error) -> Self {
        CombineError::FileSystem(FileSystemError::Io(err))
    }
}

impl From<toml::de::Error> for CombineError {
    fn from(err: toml::de::Error) -> Self {
        CombineError::Config(ConfigError::InvalidFormat(err))
    }
}

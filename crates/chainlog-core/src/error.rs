//! Error types

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while configuring or draining a logger
#[derive(Error, Debug, Clone)]
pub enum LogError {
    /// The log file could not be opened
    #[error("Failed to open log file {path}. Please check if the file path is valid and if the process has write permissions to the directory.")]
    OpenFailed { path: String },

    /// A queued write against the file target failed
    #[error("Log write #{sequence} failed: {source}")]
    Write {
        sequence: u64,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The writer task stopped before the queued writes finished
    #[error("Log writer stopped before pending writes completed")]
    WriterClosed,

    /// A file target was configured outside of a tokio runtime
    #[error("A tokio runtime is required to write logs to a file")]
    NoRuntime,

    /// Invalid configuration value
    #[error("Invalid logging configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(Arc<std::io::Error>),
}

impl LogError {
    /// Create an open-failure error for a path
    pub fn open_failed(path: impl Into<String>) -> Self {
        Self::OpenFailed { path: path.into() }
    }

    /// Create a write error for the write with the given sequence number
    pub fn write(sequence: u64, source: std::io::Error) -> Self {
        Self::Write {
            sequence,
            source: Arc::new(source),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Sequence number of the failed write, if this is a write error
    pub fn sequence(&self) -> Option<u64> {
        match self {
            Self::Write { sequence, .. } => Some(*sequence),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_yaml::Error> for LogError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(format!("Failed to parse YAML: {}", err))
    }
}

pub type LogResult<T> = Result<T, LogError>;

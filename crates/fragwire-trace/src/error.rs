use std::path::PathBuf;

/// Errors that can occur while persisting trace records.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// The trace file could not be created or opened for appending.
    #[error("failed to open trace file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred while writing a record.
    #[error("trace I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TraceError>;

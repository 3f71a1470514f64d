//! Error types for the measurement harness

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or running a measurement
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The requested operation name is not in the supported set
    #[error("unknown operation `{0}` (expected one of: add, sub, mul, div, sqrt, exp, pow, log, sin, cos, tan)")]
    UnknownOperation(String),

    /// The harness configuration is unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sample file could not be created or written
    #[error("cannot write sample file {path}: {source}")]
    Io {
        /// Destination path of the failed write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

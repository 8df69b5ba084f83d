use std::path::PathBuf;

use thiserror::Error;

/// qrpass error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{what} is not available: {hint}")]
    MissingDependency {
        what: &'static str,
        hint: &'static str,
    },

    #[error("QR encoding failed: {0}")]
    Encoding(String),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal output failed: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

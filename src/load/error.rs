use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not create output directory: {reason}")]
    NoStorage { reason: String },
    #[error("Could not store document at {path:?}: {reason}")]
    CantStore { path: PathBuf, reason: String },
    #[error("Could not convert document for {path:?} to {format}: {reason}")]
    ConversionError {
        path: PathBuf,
        format: String,
        reason: String,
    },
}

//! Error types for termenu.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid escape prefix: {0:?} (must be non-empty and contain no whitespace)")]
    InvalidPrefix(String),

    #[error("Input closed while waiting for a selection")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

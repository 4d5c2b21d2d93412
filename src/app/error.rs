use thiserror::Error;

use crate::client::ClientError;
use crate::config::ConfigError;
use crate::domain::ValidationError;

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RecapError>;

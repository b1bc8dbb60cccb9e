//! Error type definitions

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

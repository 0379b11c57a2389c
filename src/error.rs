// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("no URL given")]
    EmptyUrl,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Key/value sequences handed to the code generator differ in length.
    /// Extraction keeps them in lock-step, so this is a bug, not bad input.
    #[error("lookup table shape mismatch: {keys} keys vs {values} values")]
    LengthMismatch { keys: usize, values: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

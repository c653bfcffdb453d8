//! Error types for purchais.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} is already in progress")]
    Busy(&'static str),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("bad seed file: {0}")]
    Seed(String),

    #[error("ingestion failed: {0}")]
    Ingestion(String),

    #[error("recipe suggestion failed: {0}")]
    Suggestion(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

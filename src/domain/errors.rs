//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Transcript client error: {0}")]
    Client(String),

    /// Response body did not match the transcript schema.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Form input that could not be coerced (e.g. non-numeric grade).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}

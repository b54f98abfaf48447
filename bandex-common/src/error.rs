//! Common error types for Bandex

use thiserror::Error;

/// Common result type for Bandex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Bandex components
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

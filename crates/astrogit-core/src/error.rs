//! Error types for AstroGit

use thiserror::Error;

/// Main error type for horoscope card operations
#[derive(Error, Debug)]
pub enum HoroscopeError {
    /// Writing to the system clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Opening a link in the browser failed
    #[error("Failed to open link: {0}")]
    LinkOpen(String),

    /// Horoscope date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using HoroscopeError
pub type HoroscopeResult<T> = Result<T, HoroscopeError>;

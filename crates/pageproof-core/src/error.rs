//! Unified error types for pageproof

use thiserror::Error;

/// Unified error type for all pageproof operations
#[derive(Error, Debug)]
pub enum PageproofError {
    // Navigation errors
    #[error("Navigation failed: {0}")]
    Navigation(String),

    // Readiness wait errors
    #[error("Timed out waiting for {condition} after {elapsed_ms}ms")]
    Timeout { condition: String, elapsed_ms: u64 },

    // Interaction errors
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    // Screenshot errors
    #[error("Screenshot capture failed: {0}")]
    Screenshot(String),

    // Browser transport errors
    #[error("Browser error: {0}")]
    Browser(String),

    // Scenario errors
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using PageproofError
pub type Result<T> = std::result::Result<T, PageproofError>;

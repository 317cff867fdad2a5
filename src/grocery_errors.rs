//! # Grocery Error Types Module
//!
//! Errors raised at the edges of grocery list generation: loading
//! configuration and reading ingredient occurrences. Consolidation itself
//! never fails; unreadable measurements are carried through verbatim.

/// Custom error types for configuration and input loading
#[derive(Debug, Clone, PartialEq)]
pub enum GroceryError {
    /// Invalid configuration value
    Config(String),
    /// Input file could not be read
    Io(String),
    /// Input could not be decoded into ingredient occurrences
    InvalidInput(String),
}

impl std::fmt::Display for GroceryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroceryError::Config(msg) => write!(f, "Configuration error: {msg}"),
            GroceryError::Io(msg) => write!(f, "I/O error: {msg}"),
            GroceryError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for GroceryError {}

impl From<std::io::Error> for GroceryError {
    fn from(err: std::io::Error) -> Self {
        GroceryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GroceryError {
    fn from(err: serde_json::Error) -> Self {
        GroceryError::InvalidInput(err.to_string())
    }
}

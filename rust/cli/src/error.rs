//! Error type for CLI operations, with `From` conversions so command
//! handlers can use the `?` operator throughout.

use std::fmt;

use riverline_engine::errors::EngineError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes)
    Io(std::io::Error),
    /// Invalid command-line arguments
    InvalidInput(String),
    /// Error surfaced by the round engine
    Engine(EngineError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

use thiserror::Error;

/// Neoclock error types
#[derive(Error, Debug)]
pub enum NeoclockError {
    #[error("Font error: {0}")]
    Font(String),

    #[error("Font not found: '{0}'")]
    FontNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Result type for Neoclock operations
pub type Result<T> = std::result::Result<T, NeoclockError>;

//! Centralized error types for Armature.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for scaffolding operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("No templates found under {}", .0.display())]
    NoTemplates(PathBuf),

    #[error("{0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cancelled")]
    Cancelled,
}

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Create an invalid-name error from a validator message.
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    /// True when the user dismissed a prompt rather than something failing.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

//! Error types for scorer construction and scoring
//!
//! Construction errors are all-or-nothing: they are returned before any
//! scorer exists. Scoring errors come from the model or the raw metric
//! at call time.

use crate::scoring::ResponseMethod;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hyperfs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the scorer factory, scorers and metric functions.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument value is outside its recognized set.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The metric argument is neither a name nor a custom metric.
    #[error("Type error: {0}")]
    Type(String),

    /// The model cannot produce the requested output.
    #[error("Model does not support response method '{method}'")]
    UnsupportedResponse { method: ResponseMethod },

    /// A raw score function rejected its inputs.
    #[error("Scoring error: {0}")]
    Scoring(String),

    /// Scorer configuration could not be interpreted.
    #[error("Invalid scorer configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this error was raised while validating scorer arguments.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Type(_))
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "E001",
            Self::Type(_) => "E002",
            Self::UnsupportedResponse { .. } => "E010",
            Self::Scoring(_) => "E011",
            Self::Config { .. } => "E020",
            Self::Io { .. } => "E030",
            Self::Yaml(_) => "E031",
            Self::Json(_) => "E032",
        }
    }
}

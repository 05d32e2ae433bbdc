// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CovFilterError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CovFilterError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, CovFilterError>;

/// Domain-layer errors: rejected filter criteria.
///
/// All variants are user-input errors detected before any row is touched;
/// the caller reports them and waits for corrected input.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("set either a minimum PCT coverage or a minimum Q coverage before filtering")]
    MissingCriteria,

    #[error("minimum PCT coverage must be a number between 0 and 100 (got '{input}')")]
    InvalidPct { input: String },

    #[error("minimum Q coverage must be a number between 0 and 100 (got '{input}')")]
    InvalidQ { input: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("exact-match filtering requested but no matcher is installed")]
    ExactMatcherUnavailable,
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read report '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report line {line}: {details}")]
    ReportParse { line: usize, details: String },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CovFilterError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CovFilterError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CovFilterError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CovFilterError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

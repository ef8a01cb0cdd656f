use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a clean run, a run
/// that found end-of-life dependencies, and a run that failed outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no dependency has passed its end-of-life date
    Success = 0,
    /// At least one dependency was classified CRITICAL
    CriticalDependencies = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable dependency file, bad config, write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CriticalDependencies => write!(f, "Critical Dependencies (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-level errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum EolError {
    #[error("Dependency file not found: {path}\n\n💡 Hint: {suggestion}")]
    DependencyFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain a JSON array of {{\"name\", \"version\", \"ecosystem\", \"direct\", \"dev\"}} records")]
    DependencyFileParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid duration: '{value}'\n\n💡 Hint: Use formats like '1d' (1 day), '12h' (12 hours), '30m' (30 minutes), '1d12h' or a plain number of seconds")]
    InvalidDuration { value: String },
}

/// Failures raised while talking to the release catalog.
///
/// Only [`CatalogError::NoCachedData`] and [`CatalogError::Cancelled`] are
/// fatal to a single dependency's resolution; the other variants degrade to
/// "no match" inside the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No cached data available for '{product}' and offline mode is enabled")]
    NoCachedData { product: String },

    #[error("Product '{product}' is not listed in the release catalog")]
    ProductNotFound { product: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog returned status {status} for '{product}'")]
    HttpStatus { product: String, status: u16 },

    #[error("Malformed catalog response for '{product}': {details}")]
    MalformedResponse { product: String, details: String },

    #[error("Resolution cancelled before the catalog was contacted")]
    Cancelled,
}

impl CatalogError {
    /// Whether this failure must be reported against the dependency instead of
    /// being treated as "no catalog entry".
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CatalogError::NoCachedData { .. } | CatalogError::Cancelled
        )
    }

    /// Whether retrying the request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Network(_) => true,
            CatalogError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

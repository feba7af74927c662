use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents data validation errors (e.g., input too short or too long).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents a failure to extract text from an uploaded document.
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    /// Represents a completion backend that is not configured or failed to answer.
    /// Always recovered locally via the deterministic fallback, never surfaced
    /// to the caller of the pipeline.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::BackendUnavailable(format!("HTTP error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

/// Typed errors raised by the document extractor. Unlike classification these
/// are caller-visible: an unreadable or unsupported file is a legitimate failure.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The uploaded file contained zero bytes. Checked before MIME detection.
    #[error("Empty file: no bytes to extract")]
    EmptyFile,

    /// The detected MIME type is not in the supported set.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// Extraction succeeded but the text trims to fewer than 5 characters.
    #[error("File does not contain enough text")]
    EmptyExtraction,

    /// Every extraction strategy for the format was exhausted.
    #[error("Extraction failed for {format}: {reason}")]
    ExtractionFailed { format: String, reason: String },
}

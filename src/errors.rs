//! Unified application error type.
//! Store, image hosts, core and cli all return AppError so that the
//! presentation layer decides how a failure is shown.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Worksheet '{0}' not found")]
    WorksheetNotFound(String),

    #[error("Invalid row index: {0}")]
    InvalidRowIndex(usize),

    #[error("Invalid column index: {0}")]
    InvalidColumn(usize),

    // ---------------------------
    // Image hosting
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image upload failed: {0}")]
    Upload(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid order number: '{0}'")]
    InvalidOrder(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the failure comes from an unreachable or misconfigured
    /// upstream (store or image host) rather than from the input.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            AppError::SourceUnavailable(_)
                | AppError::Io(_)
                | AppError::Csv(_)
                | AppError::WorksheetNotFound(_)
                | AppError::Http(_)
                | AppError::Upload(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

//! Error handling for dashboard generation.
//!
//! Provides error types with context for register retrieval, decoding,
//! CSV parsing, payload serialization and output failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Register download from {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Payload serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Register file not found at path: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Could not decode register file: {path} - {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl DashboardError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

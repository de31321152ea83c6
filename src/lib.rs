//! Recipe Reporter Library
//!
//! A Rust library for aggregating recipe delivery records into a combined
//! JSON report in a single pass over the input.
//!
//! This library provides tools for:
//! - Parsing 12-hour "AM/PM" clock values and weekday-scoped delivery windows
//! - Decoding delivery records from a JSON source file
//! - Fanning each record out to a set of independent report subjects
//! - Composing the subjects' fragments into one sparse report document
//! - Comprehensive error handling for malformed input and selections

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_processor;
        pub mod report_subjects;
    }
    pub mod adapters {
        pub mod json_file;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DeliveryRecord, DeliveryWindow, Hour, Weekday};
pub use app::services::report_processor::{Report, ReportProcessor};

/// Result type alias for the recipe reporter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for recipe report processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source file could not be found
    #[error("Source file not found: {path}")]
    SourceNotFound { path: String },

    /// Outer JSON document of the source file failed to decode
    #[error("JSON decoding error in '{file}': {message}")]
    JsonDecoding {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A record field (hour token, weekday token, window pattern) failed to parse
    #[error("Record format error: {message}")]
    RecordFormat { message: String },

    /// Subject selection was malformed (bad flag value, no subjects chosen)
    #[error("Selection error: {message}")]
    Selection { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a source-not-found error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a JSON decoding error with context
    pub fn json_decoding(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::JsonDecoding {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a record format error
    pub fn record_format(message: impl Into<String>) -> Self {
        Self::RecordFormat {
            message: message.into(),
        }
    }

    /// Create a selection error
    pub fn selection(message: impl Into<String>) -> Self {
        Self::Selection {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonDecoding {
            file: "unknown".to_string(),
            message: "JSON decoding failed".to_string(),
            source: Some(error),
        }
    }
}

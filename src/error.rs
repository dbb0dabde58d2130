//! Error types for the Distill library.
//!
//! All fallible operations return [`DistillError`] through the [`Result`] alias.
//! Only malformed requests are surfaced as errors: an unknown language or
//! algorithm, an invalid `k`, an empty document or an invalid configuration.
//! Numeric degeneracies inside the scoring algorithms are absorbed locally and,
//! when an iterative routine stops early, reported as a [`SummaryWarning`]
//! attached to an otherwise valid result.
//!
//! # Examples
//!
//! ```
//! use distill::error::{DistillError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DistillError::invalid_request("k must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for Distill operations.
#[derive(Error, Debug)]
pub enum DistillError {
    /// The input text produced no sentences.
    #[error("Empty document: {0}")]
    EmptyDocument(String),

    /// The request itself is invalid (k = 0, malformed text).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No linguistic resources or segmentation rules exist for the language code.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The algorithm identifier is not recognized.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Analysis-related errors (tokenizer construction, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with DistillError.
pub type Result<T> = std::result::Result<T, DistillError>;

impl DistillError {
    /// Create a new empty document error.
    pub fn empty_document<S: Into<String>>(msg: S) -> Self {
        DistillError::EmptyDocument(msg.into())
    }

    /// Create a new invalid request error.
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        DistillError::InvalidRequest(msg.into())
    }

    /// Create a new unsupported language error.
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        DistillError::UnsupportedLanguage(language.into())
    }

    /// Create a new unknown algorithm error.
    pub fn unknown_algorithm<S: Into<String>>(identifier: S) -> Self {
        DistillError::UnknownAlgorithm(identifier.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DistillError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DistillError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DistillError::Other(msg.into())
    }
}

/// Non-fatal diagnostics produced while summarizing.
///
/// Iterative routines never fail; when they stop before converging they return
/// their last iterate and record one of these on the [`Summary`](crate::summarizer::Summary).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryWarning {
    /// The iteration cap was reached before the convergence threshold.
    NonConvergence {
        /// Routine that stopped early ("power_iteration", "svd").
        routine: String,
        /// Iterations (or sweeps) performed.
        iterations: usize,
        /// Last observed change between iterates.
        delta: f64,
    },

    /// The caller-supplied deadline elapsed between iterations.
    DeadlineExceeded {
        /// Routine that stopped early.
        routine: String,
        /// Iterations completed before the deadline.
        iterations: usize,
    },
}

impl SummaryWarning {
    /// Name of the routine that raised this warning.
    pub fn routine(&self) -> &str {
        match self {
            SummaryWarning::NonConvergence { routine, .. } => routine,
            SummaryWarning::DeadlineExceeded { routine, .. } => routine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = DistillError::empty_document("no sentences");
        assert_eq!(error.to_string(), "Empty document: no sentences");

        let error = DistillError::unsupported_language("klingon");
        assert_eq!(error.to_string(), "Unsupported language: klingon");

        let error = DistillError::unknown_algorithm("magic");
        assert_eq!(error.to_string(), "Unknown algorithm: magic");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = DistillError::from(json_error);

        match error {
            DistillError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }

    #[test]
    fn test_warning_serialization() {
        let warning = SummaryWarning::NonConvergence {
            routine: "power_iteration".to_string(),
            iterations: 100,
            delta: 0.5,
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"kind\":\"non_convergence\""));
        assert_eq!(warning.routine(), "power_iteration");
    }
}

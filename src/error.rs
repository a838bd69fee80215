//! Error types for the Leave Entitlement Engine.
//!
//! The calculation functions themselves never fail: degenerate dates degrade to zero
//! entitlement. Errors only arise while loading policy configuration or while turning
//! a request batch into employees.

use thiserror::Error;

/// The main error type for the Leave Entitlement Engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The policy parsed but its values are inconsistent.
    #[error("Invalid leave policy: {message}")]
    InvalidPolicy {
        /// What is wrong with the policy.
        message: String,
    },

    /// An employee record could not be accepted into a batch.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The same employee identifier appeared more than once in a batch.
    #[error("Duplicate employee id in batch: {id}")]
    DuplicateEmployee {
        /// The repeated identifier.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the PPh21 Withholding Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a PPh21 calculation.

use thiserror::Error;

/// The main error type for the PPh21 Withholding Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pph21_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid calculation month: 13");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A supplied input value was invalid (e.g. a negative amount).
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The calculation month was outside the valid range for the
    /// requested calculation path.
    #[error("Invalid calculation month: {month}")]
    InvalidMonth {
        /// The rejected month value.
        month: u8,
    },

    /// No active tax profile could be resolved for an employment.
    ///
    /// The engine never guesses a profile; batch callers report this per
    /// employment and continue with the rest of the batch.
    #[error("No active tax profile for employment '{employment_id}'")]
    MissingTaxProfile {
        /// The employment the profile was missing for.
        employment_id: String,
    },

    /// An earning component code was not found in the catalog.
    #[error("Earning component not found: {code}")]
    ComponentNotFound {
        /// The component code that was not found.
        code: String,
    },

    /// A deduction component code was not found in the catalog.
    #[error("Deduction component not found: {code}")]
    DeductionComponentNotFound {
        /// The deduction component code that was not found.
        code: String,
    },

    /// Catalog configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the Override Notification Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while banding rates, parsing
//! the WS carrier table, aggregating code selections, and resolving
//! dispatch inputs.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Override Notification Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use override_engine::error::EngineError;
///
/// let error = EngineError::BranchNotFound {
///     carrier: "Empire".to_string(),
///     branch: "Atlantis".to_string(),
/// };
/// assert_eq!(error.to_string(), "No Empire MGA code for branch 'Atlantis'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rate input fell outside the valid domain of its band table.
    #[error("Rate {rate} out of range: expected interval between {min} and {max}")]
    RateOutOfRange {
        /// The rejected input rate.
        rate: Decimal,
        /// Lowest valid rate, inclusive.
        min: u32,
        /// Highest valid rate, inclusive.
        max: u32,
    },

    /// An exact-key lookup missed a dense rate table.
    ///
    /// Dense tables cover every integer in their domain, so this indicates
    /// a precondition violation (e.g. truncation skipped upstream).
    #[error("No entry in the {table} table for rate {key}")]
    RateTableGap {
        /// Name of the table that was consulted.
        table: &'static str,
        /// The integer key that was not found.
        key: u32,
    },

    /// A branch name was not present in a carrier's MGA code table.
    #[error("No {carrier} MGA code for branch '{branch}'")]
    BranchNotFound {
        /// The carrier whose table was consulted.
        carrier: String,
        /// The branch name that was not found.
        branch: String,
    },

    /// A pasted WS carrier table row had too few columns.
    ///
    /// Parsing aborts on the first malformed row; no partial result is
    /// returned.
    #[error("Invalid WS carrier table: row {line} has {columns} columns, expected at least 6")]
    MalformedTable {
        /// One-based row number within the table body.
        line: usize,
        /// Number of tab-separated columns found.
        columns: usize,
    },

    /// A selected choice index did not resolve to a parsed record.
    #[error("Selected code index {index} out of range for {len} parsed records")]
    SelectionIndexOutOfRange {
        /// The index that was selected.
        index: usize,
        /// Number of records available.
        len: usize,
    },

    /// An attachment variable could not be resolved to a document handle.
    #[error("Attachment variable '{variable}' could not be resolved")]
    AttachmentNotFound {
        /// The derived attachment variable identifier.
        variable: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

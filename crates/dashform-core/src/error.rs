//! Core error types for the dashform library.
//!
//! This module provides the [`DashformError`] enum covering every failure the
//! library can raise: malformed field input, select lookups that miss, form
//! lookups by unknown name, and malformed tabular input to the row utilities.
//!
//! All errors are synchronous, caller-input-validation failures raised at the
//! point of violation. The request layer decides user-facing presentation.

use thiserror::Error;

/// The primary error type for the dashform library.
///
/// Each variant maps to an HTTP status code via [`DashformError::status_code`]
/// so the request layer can turn a failed update directly into a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashformError {
    // ── Field validation ─────────────────────────────────────────────

    /// A raw value did not parse under a field's fixed date pattern.
    ///
    /// Carries the offending value and the expected pattern. The field's
    /// prior value is left unchanged.
    #[error("Invalid date format for '{value}'. Expected format: {format}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// The `strftime`-style pattern the input was parsed against.
        format: String,
    },

    /// A select was asked to choose a value not among its options.
    ///
    /// Lists every available value so the request layer can report what the
    /// caller could have asked for.
    #[error("Failed to select value '{value}' in select '{field}'. Available: [{}]", .available.join(", "))]
    ValueNotFound {
        /// Name of the select field.
        field: String,
        /// The value that matched no option.
        value: String,
        /// All option values, in list order.
        available: Vec<String>,
    },

    // ── Form lookups ─────────────────────────────────────────────────

    /// A lookup or replace referenced a field name not present in the form.
    #[error("Field with name '{0}' not found in FilterForm")]
    UnknownField(String),

    /// A field was missing the identity required to join a form.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    // ── Row / parameter utilities ────────────────────────────────────

    /// Tabular or parameter input did not have the expected shape.
    #[error("Shape error: {0}")]
    Shape(String),
}

impl DashformError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// Everything here is caller input validation, so the mapping is flat:
    /// `InvalidField` signals a programming error in form assembly (500),
    /// the rest are bad request input (400).
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidDate { .. }
            | Self::ValueNotFound { .. }
            | Self::UnknownField(_)
            | Self::Shape(_) => 400,
            Self::InvalidField(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, DashformError>`.
pub type DashformResult<T> = Result<T, DashformError>;

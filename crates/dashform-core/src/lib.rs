//! # dashform-core
//!
//! Core types for the dashform library. This crate has no dependency on the
//! form layer and provides the foundation the other crates build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`value`] - Scalar value model for tabular result sets
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use error::{DashformError, DashformResult};
pub use value::Value;

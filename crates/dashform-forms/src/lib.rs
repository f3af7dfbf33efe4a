//! # dashform-forms
//!
//! Form modeling and rendering for server-rendered dashboard filter bars.
//! Provides the [`FormField`] abstraction with date-picker and single-select
//! variants, the [`FilterForm`] container that bulk-updates fields from
//! request parameters and serializes to markup, and utilities that derive
//! select options from a result set.
//!
//! ## Modules
//!
//! - [`fields`] - Field types: [`DateSelector`], [`Select`], [`SelectOption`]
//! - [`form`] - The [`FilterForm`] container and [`Label`] wrapper
//! - [`rows`] - Result-set and request-parameter utilities

pub mod fields;
pub mod form;
pub mod rows;

// Re-export the most commonly used types at the crate root.
pub use fields::{DateSelector, FormField, Select, SelectOption};
pub use form::{FilterForm, Label};
pub use rows::{
    extract_unique_column_values, normalize_params, normalize_params_with_default, rows_from_json,
    Row,
};

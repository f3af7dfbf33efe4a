//! # dashform
//!
//! Server-rendered filter forms for data dashboards.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. You can depend on `dashform` to get everything, or depend on the
//! individual crates for finer-grained control.
//!
//! ```
//! use dashform::forms::{DateSelector, FilterForm, Select};
//!
//! let form = FilterForm::new(
//!     vec![
//!         Box::new(Select::new("region", "Region", ["north", "south"])),
//!         Box::new(DateSelector::new("start_date", "")),
//!     ],
//!     "filter_rows",
//! );
//! let html = form.render();
//! assert!(html.starts_with("<form action='/dashboard/' method='GET'>"));
//! ```

/// Core types: errors, scalar values, and logging.
pub use dashform_core as core;

/// Fields, the filter form container, and row/parameter utilities.
pub use dashform_forms as forms;

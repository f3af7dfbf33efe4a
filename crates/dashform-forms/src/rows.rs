//! Result-set and request-parameter utilities.
//!
//! The data layer hands over a result set as uniform-shape key/value
//! records; [`extract_unique_column_values`] derives from it, per column,
//! the sorted distinct values used to populate [`Select`](crate::Select)
//! options. [`normalize_params`] maps raw request parameters onto the
//! sentinel "no filter" convention so they can flow straight into
//! [`FilterForm::update`](crate::FilterForm::update).

use std::collections::{BTreeSet, HashMap};

use dashform_core::{DashformError, DashformResult, Value};

use crate::fields::SelectOption;

/// One record of a uniform-shape result set.
pub type Row = HashMap<String, Value>;

/// Ingests a raw JSON result set from the data layer.
///
/// The input must be an array of objects with scalar cells; anything else
/// fails with [`DashformError::Shape`].
pub fn rows_from_json(data: &serde_json::Value) -> DashformResult<Vec<Row>> {
    let serde_json::Value::Array(items) = data else {
        return Err(DashformError::Shape(
            "expected a list of records".to_string(),
        ));
    };

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let serde_json::Value::Object(cells) = item else {
            return Err(DashformError::Shape(
                "expected a list of records".to_string(),
            ));
        };
        let mut row = Row::with_capacity(cells.len());
        for (key, cell) in cells {
            row.insert(key.clone(), Value::try_from(cell)?);
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Computes, per column, the sorted ascending sequence of distinct non-null
/// values observed across all rows.
///
/// Every row must carry the same key set as the first row; a mismatch fails
/// with [`DashformError::Shape`]. An empty input yields an empty map. A
/// column whose values are all null yields an empty sequence.
pub fn extract_unique_column_values(rows: &[Row]) -> DashformResult<HashMap<String, Vec<Value>>> {
    let Some(first) = rows.first() else {
        return Ok(HashMap::new());
    };

    let keys: BTreeSet<&str> = first.keys().map(String::as_str).collect();
    let mut unique: HashMap<&str, BTreeSet<&Value>> = HashMap::new();

    for row in rows {
        if row.len() != keys.len() || !row.keys().all(|k| keys.contains(k.as_str())) {
            return Err(DashformError::Shape(
                "all rows must be records with the same keys".to_string(),
            ));
        }
        for (key, value) in row {
            if !value.is_null() {
                unique.entry(key.as_str()).or_default().insert(value);
            }
        }
    }

    Ok(keys
        .into_iter()
        .map(|key| {
            let values = unique
                .remove(key)
                .map_or_else(Vec::new, |set| set.into_iter().cloned().collect());
            (key.to_string(), values)
        })
        .collect())
}

/// Normalizes raw request parameters against the
/// [`SelectOption::DEFAULT_VALUE`] sentinel.
///
/// See [`normalize_params_with_default`].
pub fn normalize_params(
    params: &HashMap<String, String>,
    keys: &[&str],
) -> HashMap<String, Option<String>> {
    normalize_params_with_default(params, keys, SelectOption::DEFAULT_VALUE)
}

/// Normalizes raw request parameters against an explicit sentinel.
///
/// For each key, the result holds `Some(value)` when the parameter is
/// present, non-empty, and not the sentinel; otherwise `None`, meaning "no
/// filter applied". Missing keys are never an error — an absent parameter
/// is an absent filter.
pub fn normalize_params_with_default(
    params: &HashMap<String, String>,
    keys: &[&str],
    default_value: &str,
) -> HashMap<String, Option<String>> {
    keys.iter()
        .map(|&key| {
            let value = params
                .get(key)
                .filter(|v| !v.is_empty() && v.as_str() != default_value);
            (key.to_string(), value.cloned())
        })
        .collect()
}

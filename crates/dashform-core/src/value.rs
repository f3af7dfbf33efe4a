//! Scalar value model for tabular result sets.
//!
//! The [`Value`] enum represents a single cell of a dashboard result set in a
//! source-agnostic way. Rows arrive from the data layer as plain key/value
//! records; the row utilities collect distinct cell values per column to
//! populate select options, which requires a total ordering across values.

use std::cmp::Ordering;
use std::fmt;

use crate::error::DashformError;

/// A source-agnostic representation of a result-set cell.
///
/// Result sets are scalar tabular data, so only scalar variants exist.
/// `Value` carries a total ordering: variants order by rank
/// (null < bool < number < string < date), integers and floats compare
/// numerically against each other, and floats use `total_cmp`.
///
/// # Examples
///
/// ```
/// use dashform_core::value::Value;
///
/// let v = Value::from(42_i64);
/// assert_eq!(v, Value::Int(42));
/// assert!(Value::Int(1) < Value::Float(1.5));
///
/// let v = Value::from("hello");
/// assert_eq!(v.to_string(), "hello");
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// A missing value, excluded from derived filter options.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// A date without time.
    Date(chrono::NaiveDate),
}

impl Value {
    /// Returns `true` if this value is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Ordering rank of the variant. Numbers share a rank so that integers
    /// and floats interleave when a column mixes them.
    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::String(_) => 3,
            Self::Date(_) => 4,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{d}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    #[allow(clippy::cast_precision_loss)]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            // Remaining pairs never share a rank.
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = DashformError;

    /// Converts a JSON scalar into a [`Value`].
    ///
    /// Numbers become [`Value::Int`] when they fit in `i64`, otherwise
    /// [`Value::Float`]. Arrays and objects are rejected: result sets are
    /// scalar tabular data.
    fn try_from(v: &serde_json::Value) -> Result<Self, Self::Error> {
        match v {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                || {
                    n.as_f64().map(Self::Float).ok_or_else(|| {
                        DashformError::Shape(format!("unrepresentable number: {n}"))
                    })
                },
                |i| Ok(Self::Int(i)),
            ),
            serde_json::Value::String(s) => Ok(Self::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(
                DashformError::Shape("row values must be scalar".to_string()),
            ),
        }
    }
}

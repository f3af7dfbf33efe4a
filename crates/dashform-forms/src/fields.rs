//! Form field types and their HTML rendering.
//!
//! Each field is a named, value-holding, renderable unit implementing the
//! [`FormField`] trait. Two variants exist: [`DateSelector`] (a date input
//! constrained to a fixed `YYYY-MM-DD` pattern) and [`Select`] (a dropdown
//! over a sentinel-prefixed option list with a single-selection invariant).
//!
//! Rendered markup is part of the library's frozen outbound surface and is
//! reproduced byte-for-byte, quirks included.

use dashform_core::{DashformError, DashformResult};

/// One selectable value inside a [`Select`] field.
///
/// A passive value holder: the single-selection invariant is enforced by the
/// owning [`Select`], never by the option itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// The option's value, also used as its display text.
    pub value: String,
    /// Whether this option is currently selected.
    pub is_selected: bool,
}

impl SelectOption {
    /// Sentinel value meaning "no filter applied".
    pub const DEFAULT_VALUE: &'static str = "ANY";

    /// Creates a new, unselected option.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_selected: false,
        }
    }

    /// Renders the option markup.
    ///
    /// The sentinel option is followed by a disabled separator row that
    /// visually divides "no filter" from the real values.
    pub fn render(&self) -> String {
        let mut option_html = if self.is_selected {
            format!("<option value='{0}' selected>{0}</option>", self.value)
        } else {
            format!("<option value='{0}'>{0}</option>", self.value)
        };

        if self.value == Self::DEFAULT_VALUE {
            option_html.push_str("<option disabled>---</option>");
        }

        option_html
    }
}

/// A named, value-holding, renderable form unit.
///
/// Object-safe so a [`FilterForm`](crate::form::FilterForm) can own a
/// heterogeneous field list behind `Box<dyn FormField>`. Identity is the
/// `name`, unique within a form; the value mutates repeatedly via request
/// updates through the explicit fallible setter.
pub trait FormField: Send + Sync {
    /// The field's HTML `name` attribute.
    fn name(&self) -> &str;

    /// Caption shown in the label wrapping the rendered field.
    fn label_name(&self) -> &str;

    /// The field's current value, or `None` when nothing is selected.
    fn value(&self) -> Option<&str>;

    /// Validates and stores a new value.
    ///
    /// `None` is a no-op that retains the prior value. `Some` runs the
    /// field's own validation and leaves state unchanged on failure (except
    /// where documented otherwise).
    fn set_value(&mut self, value: Option<&str>) -> DashformResult<()>;

    /// Renders the field as an HTML string.
    fn render(&self) -> String;
}

/// Activation directive for the client-side date-picker widget. Idempotent:
/// it binds every element carrying the `date-selector` class at once, so
/// repeating it per field changes nothing.
const DATEPICKER_JS: &str =
    r#"<script>flatpickr(".date-selector", {dateFormat: "Y-m-d"});</script>"#;

/// A date-picker field holding a `YYYY-MM-DD` string.
///
/// The stored value is always either the construction default (today) or a
/// string that parsed under [`DateSelector::DATE_FORMAT`]. Accepted input is
/// stored verbatim, never reformatted.
#[derive(Debug, Clone)]
pub struct DateSelector {
    name: String,
    label_name: String,
    value: String,
}

impl DateSelector {
    /// The fixed pattern every stored value parses under.
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Creates a date field initialized to today's date.
    ///
    /// An empty `label_name` is derived from `name` by replacing
    /// underscores with spaces.
    pub fn new(name: impl Into<String>, label_name: impl Into<String>) -> Self {
        let name = name.into();
        let label_name = label_name.into();
        let label_name = if label_name.is_empty() {
            name.replace('_', " ")
        } else {
            label_name
        };
        let value = chrono::Local::now()
            .date_naive()
            .format(Self::DATE_FORMAT)
            .to_string();
        Self {
            name,
            label_name,
            value,
        }
    }

    /// Sets an explicit initial value, stored verbatim.
    ///
    /// Construction trusts the caller; request-driven updates go through
    /// [`FormField::set_value`], which validates.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl FormField for DateSelector {
    fn name(&self) -> &str {
        &self.name
    }

    fn label_name(&self) -> &str {
        &self.label_name
    }

    fn value(&self) -> Option<&str> {
        Some(&self.value)
    }

    fn set_value(&mut self, value: Option<&str>) -> DashformResult<()> {
        let Some(new_value) = value else {
            return Ok(());
        };
        if chrono::NaiveDate::parse_from_str(new_value, Self::DATE_FORMAT).is_err() {
            return Err(DashformError::InvalidDate {
                value: new_value.to_string(),
                format: Self::DATE_FORMAT.to_string(),
            });
        }
        // Stored verbatim, not reformatted.
        self.value = new_value.to_string();
        Ok(())
    }

    fn render(&self) -> String {
        let mut html = format!(
            "<input class='date-selector'type='date' name='{}' value='{}' id='datepicker'>",
            self.name, self.value
        );
        html.push_str(DATEPICKER_JS);
        html
    }
}

/// A single-select dropdown over a sentinel-prefixed option list.
///
/// The first option is always the [`SelectOption::DEFAULT_VALUE`] sentinel.
/// At most one option is selected at any time; the current selection is an
/// index into the owned option list, so rebuilding or replacing options can
/// never leave a dangling selection reference.
#[derive(Debug, Clone)]
pub struct Select {
    name: String,
    label_name: String,
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl Select {
    /// Creates a select over the given option values with the sentinel
    /// prepended and selected.
    pub fn new<I, S>(name: impl Into<String>, label_name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all_options = vec![SelectOption::new(SelectOption::DEFAULT_VALUE)];
        all_options.extend(options.into_iter().map(SelectOption::new));
        all_options[0].is_selected = true;
        Self {
            name: name.into(),
            label_name: label_name.into(),
            options: all_options,
            selected: Some(0),
        }
    }

    /// Applies an explicit initial selection.
    pub fn with_value(mut self, value: &str) -> DashformResult<Self> {
        self.select_value(value)?;
        Ok(self)
    }

    /// Selects the first option whose value equals `value`.
    ///
    /// All selection flags are cleared before the scan, so on a miss the
    /// field ends up fully deselected — the prior selection is NOT restored.
    /// Callers that need the old selection back must re-select it.
    pub fn select_value(&mut self, value: &str) -> DashformResult<()> {
        self.reset();
        for (i, option) in self.options.iter_mut().enumerate() {
            if option.value == value {
                option.is_selected = true;
                self.selected = Some(i);
                tracing::trace!(field = %self.name, value, "selected option");
                return Ok(());
            }
        }
        Err(DashformError::ValueNotFound {
            field: self.name.clone(),
            value: value.to_string(),
            available: self.options.iter().map(|o| o.value.clone()).collect(),
        })
    }

    /// Clears every selection flag and the selected reference.
    pub fn reset(&mut self) {
        for option in &mut self.options {
            option.is_selected = false;
        }
        self.selected = None;
    }

    /// Updates both the label caption and the identity name in place.
    pub fn rename(&mut self, new_label_name: impl Into<String>, new_name: impl Into<String>) {
        self.label_name = new_label_name.into();
        self.name = new_name.into();
    }

    /// Read view of the owned option list, sentinel first.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }
}

impl FormField for Select {
    fn name(&self) -> &str {
        &self.name
    }

    fn label_name(&self) -> &str {
        &self.label_name
    }

    fn value(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].value.as_str())
    }

    fn set_value(&mut self, value: Option<&str>) -> DashformResult<()> {
        match value {
            None => Ok(()),
            Some(v) => self.select_value(v),
        }
    }

    fn render(&self) -> String {
        let mut select_html = format!("<select name='{}'>", self.name);
        for option in &self.options {
            select_html.push_str(&option.render());
        }
        select_html.push_str("</select>");
        select_html
    }
}

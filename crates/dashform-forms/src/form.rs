//! The filter form container.
//!
//! [`FilterForm`] owns an ordered list of named fields, bulk-updates their
//! values from normalized request parameters, and serializes the whole form
//! to a single markup string. [`Label`] wraps rendered field markup with a
//! caption.
//!
//! One form instance is request-scoped: constructed, updated from one
//! request's parameters, rendered, and discarded. Selection state mutates in
//! place, so an instance must never be shared across concurrent requests.

use std::collections::HashMap;

use dashform_core::{DashformError, DashformResult};

use crate::fields::FormField;

/// Wraps rendered field markup with a caption. Pure rendering, no state.
#[derive(Debug, Clone)]
pub struct Label {
    content: String,
}

impl Label {
    /// Creates a label around the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Renders the label markup.
    pub fn render(&self) -> String {
        format!("<label>{}</label>", self.content)
    }
}

/// Fixed-style submit button, part of the frozen rendering surface.
const SUBMIT_BUTTON: &str = "<input type='submit' value='Filter' style='background: #E1703D; \
border-radius: 5px; padding: 5px; color: white; font-weight: bold; font-size: 1em; border: 0; \
cursor: pointer'>";

/// An ordered collection of named filter fields with bulk get/set by name
/// and full-form serialization.
///
/// Field names are unique within a form; lookups by name are unambiguous.
/// The form exclusively owns its fields — they are replaceable via
/// [`FilterForm::set_field`], never shared.
pub struct FilterForm {
    fields: Vec<Box<dyn FormField>>,
    action: String,
    cgi_method: String,
    request_method: String,
}

impl FilterForm {
    /// Creates a form posting to `/dashboard/` via GET.
    ///
    /// `cgi_method` is the logical operation identifier carried back to the
    /// request layer as a hidden parameter.
    pub fn new(fields: Vec<Box<dyn FormField>>, cgi_method: impl Into<String>) -> Self {
        Self {
            fields,
            action: "/dashboard/".to_string(),
            cgi_method: cgi_method.into(),
            request_method: "GET".to_string(),
        }
    }

    /// Sets the form's target URL.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Sets the HTTP verb used on submit.
    #[must_use]
    pub fn with_request_method(mut self, request_method: impl Into<String>) -> Self {
        self.request_method = request_method.into();
        self
    }

    /// Ordered read view of the owned fields.
    pub fn fields(&self) -> &[Box<dyn FormField>] {
        &self.fields
    }

    /// Computed on every call so it can never go stale after `set_field`
    /// or a select rename.
    fn position(&self, field_name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == field_name)
    }

    /// Bulk-updates field values from a normalized parameter map.
    ///
    /// Unknown keys are skipped silently when `ignore_unknown_fields` is
    /// set, and fail with [`DashformError::UnknownField`] otherwise. A
    /// field's own validation failure propagates immediately and aborts the
    /// remaining updates — partial application is possible and expected.
    /// `None` values flow through the fields' no-op path, so a normalized
    /// "no filter" parameter leaves the field untouched.
    pub fn update(
        &mut self,
        field_values: &HashMap<String, Option<String>>,
        ignore_unknown_fields: bool,
    ) -> DashformResult<()> {
        for (field_name, field_value) in field_values {
            match self.set_field_value(field_name, field_value.as_deref()) {
                Ok(()) => {}
                Err(DashformError::UnknownField(name)) => {
                    if ignore_unknown_fields {
                        tracing::debug!(field = %name, "ignoring unknown filter field");
                    } else {
                        return Err(DashformError::UnknownField(name));
                    }
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Delegates to the named field's value setter, inheriting its
    /// validation semantics.
    pub fn set_field_value(
        &mut self,
        field_name: &str,
        field_value: Option<&str>,
    ) -> DashformResult<()> {
        let i = self
            .position(field_name)
            .ok_or_else(|| DashformError::UnknownField(field_name.to_string()))?;
        self.fields[i].set_value(field_value)
    }

    /// The named field's current value, or `None` when nothing is selected.
    pub fn get_field_value(&self, field_name: &str) -> DashformResult<Option<String>> {
        Ok(self.get_field(field_name)?.value().map(ToString::to_string))
    }

    /// Looks up a field by name.
    pub fn get_field(&self, field_name: &str) -> DashformResult<&dyn FormField> {
        self.position(field_name)
            .map(|i| self.fields[i].as_ref())
            .ok_or_else(|| DashformError::UnknownField(field_name.to_string()))
    }

    /// Replaces the field with the matching name in place, preserving its
    /// position. Replace-only: an unmatched name fails with
    /// [`DashformError::UnknownField`] rather than inserting.
    pub fn set_field(&mut self, field: Box<dyn FormField>) -> DashformResult<()> {
        if field.name().is_empty() {
            return Err(DashformError::InvalidField(
                "field must have a name to be set in FilterForm".to_string(),
            ));
        }
        let i = self
            .position(field.name())
            .ok_or_else(|| DashformError::UnknownField(field.name().to_string()))?;
        self.fields[i] = field;
        Ok(())
    }

    /// Renders the fixed-style submit button.
    pub fn render_submit_button(&self) -> String {
        SUBMIT_BUTTON.to_string()
    }

    /// Serializes the whole form to markup.
    ///
    /// Field order always follows the stored sequence, so the output is
    /// deterministic for identical form state.
    pub fn render(&self) -> String {
        let mut form_html = format!(
            "<form action='{}' method='{}'>",
            self.action, self.request_method
        );
        form_html.push_str(&format!(
            "<input type='hidden' name='method' value='{}'>",
            self.cgi_method
        ));

        for field in &self.fields {
            let field_html = field.render();
            form_html.push_str(&Label::new(format!("{}: {field_html}", field.label_name())).render());
        }

        form_html.push_str(&self.render_submit_button());
        form_html.push_str("</form>");

        form_html
    }
}

//! Integration tests for the request -> form -> markup pipeline.
//!
//! These tests exercise the complete filter-form lifecycle, covering:
//! 1. Deriving select options from a result set
//! 2. Normalizing request parameters and bulk-updating the form
//! 3. Rendering the whole form to markup

use std::collections::HashMap;

use dashform_core::error::DashformError;
use dashform_core::value::Value;
use dashform_forms::fields::{DateSelector, FormField, Select, SelectOption};
use dashform_forms::form::FilterForm;
use dashform_forms::rows::{extract_unique_column_values, normalize_params, rows_from_json};

// ============================================================================
// Shared helpers
// ============================================================================

/// A result set with a region column, an owner column, and some nulls.
fn make_rows() -> Vec<dashform_forms::Row> {
    rows_from_json(&serde_json::json!([
        {"region": "south", "owner": "ana"},
        {"region": "north", "owner": "bob"},
        {"region": "north", "owner": null},
    ]))
    .expect("well-formed rows")
}

/// A filter form with one select per derived column plus a date field.
fn make_dashboard_form() -> FilterForm {
    let unique = extract_unique_column_values(&make_rows()).expect("uniform rows");

    let mut fields: Vec<Box<dyn FormField>> = Vec::new();
    for key in ["region", "owner"] {
        let options: Vec<String> = unique[key].iter().map(ToString::to_string).collect();
        fields.push(Box::new(Select::new(key, "", options)));
    }
    fields.push(Box::new(
        DateSelector::new("start_date", "From").with_value("2024-01-15"),
    ));

    FilterForm::new(fields, "filter_rows")
}

// ============================================================================
// Category 1: Deriving options from a result set
// ============================================================================

#[test]
fn test_derived_options_are_sorted_and_null_free() {
    let unique = extract_unique_column_values(&make_rows()).unwrap();
    assert_eq!(
        unique["region"],
        vec![Value::from("north"), Value::from("south")]
    );
    assert_eq!(unique["owner"], vec![Value::from("ana"), Value::from("bob")]);
}

#[test]
fn test_selects_built_from_derived_options_default_to_sentinel() {
    let form = make_dashboard_form();
    assert_eq!(
        form.get_field_value("region").unwrap(),
        Some("ANY".to_string())
    );
    assert_eq!(
        form.get_field_value("owner").unwrap(),
        Some("ANY".to_string())
    );
}

#[test]
fn test_malformed_result_set_is_rejected() {
    let err = rows_from_json(&serde_json::json!({"not": "a list"})).unwrap_err();
    assert!(matches!(err, DashformError::Shape(_)));

    let uneven = vec![
        HashMap::from([("a".to_string(), Value::Int(1))]),
        HashMap::from([("b".to_string(), Value::Int(2))]),
    ];
    assert!(extract_unique_column_values(&uneven).is_err());
}

// ============================================================================
// Category 2: Request parameters -> normalize -> update
// ============================================================================

#[test]
fn test_request_parameters_flow_into_fields() {
    let mut form = make_dashboard_form();

    let mut params = HashMap::new();
    params.insert("region".to_string(), "north".to_string());
    params.insert("owner".to_string(), "ANY".to_string());
    params.insert("start_date".to_string(), "2024-03-01".to_string());

    let normalized = normalize_params(&params, &["region", "owner", "start_date"]);
    form.update(&normalized, true).unwrap();

    assert_eq!(
        form.get_field_value("region").unwrap(),
        Some("north".to_string())
    );
    // "ANY" normalized to no-filter, so the sentinel selection is untouched.
    assert_eq!(
        form.get_field_value("owner").unwrap(),
        Some("ANY".to_string())
    );
    assert_eq!(
        form.get_field_value("start_date").unwrap(),
        Some("2024-03-01".to_string())
    );
}

#[test]
fn test_unknown_parameter_ignored_or_fatal() {
    let mut form = make_dashboard_form();
    let mut values = HashMap::new();
    values.insert("page".to_string(), Some("2".to_string()));

    form.update(&values, true).unwrap();
    assert_eq!(
        form.get_field_value("region").unwrap(),
        Some("ANY".to_string())
    );

    let err = form.update(&values, false).unwrap_err();
    assert_eq!(err, DashformError::UnknownField("page".to_string()));
}

#[test]
fn test_bad_date_aborts_update_and_keeps_prior_value() {
    let mut form = make_dashboard_form();
    let mut values = HashMap::new();
    values.insert("start_date".to_string(), Some("March 1st".to_string()));

    let err = form.update(&values, true).unwrap_err();
    assert_eq!(
        err,
        DashformError::InvalidDate {
            value: "March 1st".to_string(),
            format: "%Y-%m-%d".to_string(),
        }
    );
    assert_eq!(
        form.get_field_value("start_date").unwrap(),
        Some("2024-01-15".to_string())
    );
}

#[test]
fn test_select_miss_reports_available_values_and_deselects() {
    let mut form = make_dashboard_form();
    let err = form
        .set_field_value("region", Some("west"))
        .unwrap_err();
    assert_eq!(
        err,
        DashformError::ValueNotFound {
            field: "region".to_string(),
            value: "west".to_string(),
            available: vec![
                "ANY".to_string(),
                "north".to_string(),
                "south".to_string(),
            ],
        }
    );
    // Observed post-failure state: the select is left fully deselected.
    assert_eq!(form.get_field_value("region").unwrap(), None);
}

#[test]
fn test_renamed_select_is_found_under_new_name() {
    let mut select = Select::new("region", "Region", ["north"]);
    select.rename("Area", "area");
    let mut form = FilterForm::new(vec![Box::new(select)], "filter_rows");

    form.set_field_value("area", Some("north")).unwrap();
    assert_eq!(
        form.get_field_value("area").unwrap(),
        Some("north".to_string())
    );
    assert_eq!(
        form.get_field_value("region").unwrap_err(),
        DashformError::UnknownField("region".to_string())
    );
}

// ============================================================================
// Category 3: Rendering
// ============================================================================

#[test]
fn test_two_field_form_renders_byte_identical() {
    let build = || {
        let mut form = make_dashboard_form();
        let mut values = HashMap::new();
        values.insert("region".to_string(), Some("north".to_string()));
        form.update(&values, true).unwrap();
        form.render()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_rendered_form_carries_every_frozen_surface() {
    let html = make_dashboard_form().render();

    assert!(html.starts_with("<form action='/dashboard/' method='GET'>"));
    assert!(html.ends_with("</form>"));
    assert!(html.contains("<input type='hidden' name='method' value='filter_rows'>"));
    assert!(html.contains("<option value='ANY' selected>ANY</option><option disabled>---</option>"));
    assert!(html.contains("<select name='region'>"));
    assert!(html.contains(
        "<input class='date-selector'type='date' name='start_date' value='2024-01-15' id='datepicker'>"
    ));
    assert!(html.contains(
        "<script>flatpickr(\".date-selector\", {dateFormat: \"Y-m-d\"});</script>"
    ));
    assert!(html.contains("<label>From: <input class='date-selector'"));
    assert!(html.contains("<input type='submit' value='Filter'"));
}

#[test]
fn test_field_order_follows_construction_order() {
    let html = make_dashboard_form().render();
    let region_at = html.find("name='region'").unwrap();
    let owner_at = html.find("name='owner'").unwrap();
    let date_at = html.find("name='start_date'").unwrap();
    assert!(region_at < owner_at);
    assert!(owner_at < date_at);
}

#[test]
fn test_replaced_field_renders_in_same_position() {
    let mut form = make_dashboard_form();
    form.set_field(Box::new(Select::new("region", "Territory", ["east"])))
        .unwrap();

    let html = form.render();
    let region_at = html.find("Territory").unwrap();
    let owner_at = html.find("name='owner'").unwrap();
    assert!(region_at < owner_at);
    assert!(html.contains("<option value='east'>east</option>"));
}

#[test]
fn test_derived_label_falls_back_to_name() {
    // Select labels passed as "" stay empty; the date field derives its
    // caption from the name.
    let field = DateSelector::new("start_date", "");
    let form = FilterForm::new(vec![Box::new(field)], "filter_rows");
    assert!(form.render().contains("<label>start date: "));
}

#[test]
fn test_sentinel_constant_is_shared() {
    // The sentinel the normalizer strips is the same one selects prepend.
    assert_eq!(SelectOption::DEFAULT_VALUE, "ANY");
}

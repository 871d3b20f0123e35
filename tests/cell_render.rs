use serde_json::{json, Value};

use taskdash::table::{render, CellValue, RenderMode, Rendered};

fn cell(v: Value) -> CellValue {
    serde_json::from_value(v).unwrap()
}

#[test]
fn display_wraps_value_in_a_span() {
    let c = cell(json!({"value": "eth0"}));
    assert_eq!(
        render(&c, RenderMode::Display),
        Rendered::Markup("<span>eth0</span>".to_string())
    );
}

#[test]
fn display_attaches_title_as_tooltip() {
    let c = cell(json!({"value": 12, "title": "packet count"}));
    assert_eq!(
        render(&c, RenderMode::Display),
        Rendered::Markup("<span title=\"packet count\">12</span>".to_string())
    );
}

#[test]
fn display_never_renders_the_text_null() {
    let empty = cell(json!({"value": null, "title": "empty"}));
    let Rendered::Markup(markup) = render(&empty, RenderMode::Display) else {
        panic!("display mode must produce markup");
    };
    assert!(!markup.contains("null"));
    assert_eq!(markup, "<span title=\"empty\"></span>");

    let absent = cell(json!({}));
    assert_eq!(
        render(&absent, RenderMode::Display),
        Rendered::Markup("<span></span>".to_string())
    );
}

#[test]
fn sort_mode_falls_back_to_value_when_sort_unset() {
    let c = cell(json!({"value": "2024-01-02"}));
    assert_eq!(
        render(&c, RenderMode::Sort),
        Rendered::Value(json!("2024-01-02"))
    );
}

#[test]
fn numeric_string_sort_keys_parse_as_floats() {
    let c = cell(json!({"value": "12.5 MB", "sort": "12.5"}));
    assert_eq!(render(&c, RenderMode::Sort), Rendered::Number(12.5));
    assert_eq!(render(&c, RenderMode::Type), Rendered::Number(12.5));
}

#[test]
fn non_numeric_sort_keys_pass_through() {
    let c = cell(json!({"value": "Bravo", "sort": "bravo"}));
    assert_eq!(render(&c, RenderMode::Sort), Rendered::Value(json!("bravo")));
}

#[test]
fn numeric_sort_keys_stay_numeric() {
    let c = cell(json!({"value": "8 KB", "sort": 8192}));
    assert_eq!(render(&c, RenderMode::Sort), Rendered::Number(8192.0));
}

#[test]
fn other_modes_return_the_value_unmodified() {
    let c = cell(json!({"value": {"nested": true}, "sort": "9"}));
    assert_eq!(
        render(&c, RenderMode::Raw),
        Rendered::Value(json!({"nested": true}))
    );
}

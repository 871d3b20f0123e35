//! Table cell rendering.
//!
//! A cell arrives as a structured [`CellValue`] and is rendered differently
//! depending on what the table widget asks for: display markup, a sort key,
//! or the raw value for filtering. Pure functions, no side effects.

use serde::Deserialize;
use serde_json::Value;

/// A renderable unit for one table cell.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CellValue {
    /// The base value to display; also the sort/filter fallback.
    #[serde(default)]
    pub value: Value,
    /// Optional explicit sort key; numeric-looking keys sort numerically.
    #[serde(default)]
    pub sort: Option<Value>,
    /// Optional tooltip text attached to the display markup.
    #[serde(default)]
    pub title: Option<String>,
}

/// What the table widget is asking the cell for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Display,
    Sort,
    Type,
    /// Raw value, used for filtering and anything else.
    Raw,
}

/// A rendered cell representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Inline display markup.
    Markup(String),
    /// Numeric sort key.
    Number(f64),
    /// The value passed through unmodified.
    Value(Value),
}

/// Render a cell for the requested mode.
pub fn render(cell: &CellValue, mode: RenderMode) -> Rendered {
    match mode {
        RenderMode::Display => Rendered::Markup(display_markup(cell)),
        RenderMode::Sort | RenderMode::Type => sort_key(cell),
        RenderMode::Raw => Rendered::Value(cell.value.clone()),
    }
}

/// Inline span wrapping the value, with the title as a tooltip attribute.
/// A null value renders an empty wrapper, never the literal text "null".
fn display_markup(cell: &CellValue) -> String {
    let mut out = String::from("<span");
    if let Some(title) = &cell.title {
        out.push_str(" title=\"");
        out.push_str(title);
        out.push('"');
    }
    out.push('>');
    out.push_str(&value_text(&cell.value));
    out.push_str("</span>");
    out
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The sort/type key: `sort` coerced to a number when it parses as one,
/// otherwise passed through; `value` when no sort key is set.
fn sort_key(cell: &CellValue) -> Rendered {
    let Some(sort) = &cell.sort else {
        return Rendered::Value(cell.value.clone());
    };

    match sort {
        Value::Number(n) => match n.as_f64() {
            Some(f) => Rendered::Number(f),
            None => Rendered::Value(sort.clone()),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) => Rendered::Number(f),
            Err(_) => Rendered::Value(sort.clone()),
        },
        other => Rendered::Value(other.clone()),
    }
}

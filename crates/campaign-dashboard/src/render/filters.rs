//! MiniJinja filters and functions for the report templates.
//!
//! - `col(width)`: fit a cell to `width` display columns, truncating with `…`
//!   and padding on the right
//! - `truncate_at(width)`: truncate only, for the last column of a row
//! - `display_width`: display width of a value
//! - `bar(max)`: a bar of up to [`BAR_WIDTH`] cells scaled against `max`
//! - `percent`: a proportion as a percentage with one decimal
//! - `style_as(name)`: apply a [`Theme`] style
//! - `column_widths(headers, rows, keys=?)`: widest cell per column, capped at
//!   [`MAX_CELL_WIDTH`]. Rows are maps read through `keys`, or sequences read
//!   by position.
//!
//! Lists render as their items joined with `, `.

use minijinja::value::{Value, ValueKind};
use minijinja::Environment;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;

pub const MAX_CELL_WIDTH: usize = 32;
pub const BAR_WIDTH: usize = 24;

const ELLIPSIS: char = '…';
const LIST_SEPARATOR: &str = ", ";

/// Registers the report filters and functions on `env`.
pub fn register_filters(env: &mut Environment<'static>, theme: Theme) {
    env.add_filter("col", |value: Value, width: usize| {
        pad_right(&fit(&cell_text(&value), width), width)
    });
    env.add_filter("truncate_at", |value: Value, width: usize| {
        fit(&cell_text(&value), width)
    });
    env.add_filter("display_width", |value: Value| cell_text(&value).width());
    env.add_filter("bar", bar);
    env.add_filter("percent", |share: f64| format!("{:.1}%", share * 100.0));
    env.add_filter("style_as", move |value: Value, name: String| {
        theme.paint(&name, &cell_text(&value))
    });

    env.add_function("column_widths", column_widths);
}

fn column_widths(
    headers: Vec<String>,
    rows: Vec<Value>,
    keys: Option<Vec<String>>,
) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| {
                    let cell = match &keys {
                        Some(keys) => keys.get(i).and_then(|key| row.get_attr(key).ok()),
                        None => row.get_item(&Value::from(i)).ok(),
                    };
                    cell.map_or(0, |cell| cell_text(&cell).width())
                })
                .fold(header.width(), usize::max)
                .min(MAX_CELL_WIDTH)
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => String::new(),
        ValueKind::Seq => value
            .try_iter()
            .map(|items| {
                items
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(LIST_SEPARATOR)
            })
            .unwrap_or_default(),
        _ => value.to_string(),
    }
}

/// Cuts `text` to `width` display columns; a cut ends with the ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut kept: String = text
        .chars()
        .take_while(|&c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    kept.push(ELLIPSIS);
    kept
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    "█".repeat((count * BAR_WIDTH).div_ceil(max))
}

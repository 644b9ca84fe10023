//! Named console styles for the text reports.

use std::collections::HashMap;

use console::Style;

use crate::output::TextMode;

/// Named styles used by the report templates.
///
/// Templates refer to styles by name through the `style_as` filter; in plain
/// mode every name passes text through untouched.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
    mode: TextMode,
}

impl Theme {
    pub fn new(mode: TextMode) -> Self {
        Theme {
            styles: HashMap::new(),
            mode,
        }
        .add("title", Style::new().bold().cyan())
        .add("header", Style::new().bold())
        .add("metric", Style::new().bold().green())
        .add("muted", Style::new().dim())
        .add("bar", Style::new().cyan())
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        // Styling follows TextMode, not console's own terminal detection.
        self.styles.insert(name, style.force_styling(true));
        self
    }

    /// Applies the named style; unknown names and plain mode pass through.
    pub fn paint(&self, name: &str, text: &str) -> String {
        match (self.mode, self.styles.get(name)) {
            (TextMode::Styled, Some(style)) => style.apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }
}

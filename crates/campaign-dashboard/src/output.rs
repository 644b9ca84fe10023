//! Output mode control.
//!
//! [`OutputMode`] decides whether a command renders a styled report, a plain
//! report, or serializes its data directly. [`TextMode`] is what the text
//! renderers receive.

use clap::ValueEnum;
use serde::Deserialize;

/// Controls how output is rendered.
///
/// This is the user-facing enum for the `--output` flag and the `output`
/// config key.
///
/// - `Auto` - Detect terminal capabilities (TTY → Term, pipe → Text)
/// - `Term` - Always apply terminal styling
/// - `Text` - Never apply styling
/// - `Json`, `Yaml`, `Csv` - Serialize data directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Auto-detect: TTY gets Term, pipe gets Text
    #[default]
    Auto,
    /// Always use terminal styling
    Term,
    /// Never use styling (plain text)
    Text,
    /// Serialize data as JSON
    Json,
    /// Serialize data as YAML
    Yaml,
    /// Serialize flattened data as CSV
    Csv,
}

impl OutputMode {
    /// Resolves Auto mode to concrete Term or Text based on TTY detection.
    ///
    /// For non-Auto modes, returns self unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if atty::is(atty::Stream::Stdout) {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }

    /// Converts this output mode to a TextMode for the renderers.
    ///
    /// Returns None for structured modes.
    pub fn to_text_mode(&self) -> Option<TextMode> {
        match self.resolve_auto() {
            OutputMode::Term => Some(TextMode::Styled),
            OutputMode::Text | OutputMode::Auto => Some(TextMode::Plain),
            _ => None,
        }
    }
}

/// Whether text renderers emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Apply styles (generate ANSI escape codes)
    Styled,
    /// Plain text output
    Plain,
}

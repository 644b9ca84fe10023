//! Text reports for the terminal.
//!
//! Each command has a MiniJinja template under `templates/`, compiled into
//! the binary. Templates receive the same serialized data the structured
//! modes print, lay it out with the filters in [`filters`], and style it
//! through a [`Theme`]. Column layout measures display width, so accented
//! labels line up.

mod filters;
mod theme;

pub use theme::Theme;

use campaign_seeker::Summary;
use minijinja::{Environment, Error};
use serde::Serialize;

use crate::session::{OptionLists, Pass};

pub const NO_RESULTS: &str = "No campaigns match the current search and filters.";

const TEMPLATES: [(&str, &str); 4] = [
    ("metrics", include_str!("../../templates/metrics.jinja")),
    ("list", include_str!("../../templates/list.jinja")),
    ("summary", include_str!("../../templates/summary.jinja")),
    ("options", include_str!("../../templates/options.jinja")),
];

/// The report templates, ready to render with one theme.
pub struct Reports {
    env: Environment<'static>,
}

impl Reports {
    pub fn new(theme: Theme) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_global("no_results", NO_RESULTS);
        filters::register_filters(&mut env, theme);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Reports { env })
    }

    /// `campaigns list`: headline metrics followed by the matching records.
    pub fn list(&self, pass: &Pass<'_>) -> Result<String, Error> {
        self.render("list", &pass.list_report())
    }

    /// `campaigns summary`: metrics, histograms and the strategy trend.
    pub fn summary(&self, summary: &Summary) -> Result<String, Error> {
        self.render("summary", summary)
    }

    /// `campaigns options`: the values each filter accepts.
    pub fn options(&self, options: &OptionLists) -> Result<String, Error> {
        self.render("options", options)
    }

    fn render<S: Serialize + ?Sized>(&self, name: &str, data: &S) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

//! Command-line dashboard over the campaign catalog.
//!
//! `campaigns list`, `campaigns summary` and `campaigns options` each run a
//! single pass: load the catalog, apply the keyword search and the filter
//! flags, then render the result as a styled or plain report, or serialize
//! it as JSON, YAML or CSV.

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod render;
pub mod serialize;
pub mod session;

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::Context;
use campaign_seeker::loader::{self, MediaTranslation};
use campaign_seeker::Catalog;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::{DashboardConfig, Settings};
use crate::output::OutputMode;
use crate::render::{Reports, Theme};
use crate::serialize::serialize_structured;
use crate::session::{run_pass, OptionLists};

/// Runs one command, writing the report to `out` and validation messages
/// to `err`.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    let settings = Settings::resolve(cli, &config);
    debug!(?settings, "resolved settings");

    let catalog = load_catalog(cli.data.as_deref())?;
    let mode = settings.output;

    let rendered = match &cli.command {
        Command::List(args) => {
            let pass = run_pass(&catalog, args, &settings).context("building filter criteria")?;
            report_warnings(err, &pass.warnings)?;
            match (mode, mode.to_text_mode()) {
                (OutputMode::Csv, _) => serialize_structured(&pass.records, mode)?,
                (_, Some(text)) => Reports::new(Theme::new(text))?.list(&pass)?,
                (_, None) => serialize_structured(&pass.list_report(), mode)?,
            }
        }
        Command::Summary(args) => {
            let pass = run_pass(&catalog, args, &settings).context("building filter criteria")?;
            report_warnings(err, &pass.warnings)?;
            match mode.to_text_mode() {
                Some(text) => Reports::new(Theme::new(text))?.summary(&pass.summary)?,
                None => serialize_structured(&pass.summary, mode)?,
            }
        }
        Command::Options => {
            let options = OptionLists::from_catalog(&catalog);
            match mode.to_text_mode() {
                Some(text) => Reports::new(Theme::new(text))?.options(&options)?,
                None => serialize_structured(&options, mode)?,
            }
        }
    };

    if rendered.ends_with('\n') {
        write!(out, "{rendered}")?;
    } else {
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}

/// Loads the CSV at `path`, or the built-in dataset when there is none.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        return loader::load_embedded().context("loading built-in campaign dataset");
    };

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let catalog = loader::load_from_reader(BufReader::new(file), &MediaTranslation::default())
        .with_context(|| format!("loading campaigns from {}", path.display()))?;
    debug!(path = %path.display(), records = catalog.len(), "loaded campaign file");
    Ok(catalog)
}

fn report_warnings<E: Write>(err: &mut E, warnings: &[String]) -> std::io::Result<()> {
    for warning in warnings {
        writeln!(err, "warning: {warning}")?;
    }
    Ok(())
}

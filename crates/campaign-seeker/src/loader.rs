//! Builds a [`Catalog`] from tabular campaign data.
//!
//! Rows carry the media channels as one `|`-separated cell of raw labels
//! (`TV|OOH|Digital`). The loader splits them, maps each raw label through a
//! [`MediaTranslation`] table to its display label, parses the launch date
//! and derives the launch year.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::campaign::{Campaign, CampaignFields};
use crate::catalog::Catalog;
use crate::date::parse_date;
use crate::error::{Result, SeekerError};

/// The dataset compiled into the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../data/campaigns.csv");

/// Separator between raw media labels in a row.
pub const MEDIA_SEPARATOR: char = '|';

/// Raw media label to display label table.
///
/// Labels not in the table pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTranslation {
    labels: HashMap<String, String>,
}

impl MediaTranslation {
    /// A table with no entries: every label passes through.
    pub fn identity() -> Self {
        MediaTranslation {
            labels: HashMap::new(),
        }
    }

    /// Adds or replaces a mapping.
    pub fn with(mut self, raw: impl Into<String>, display: impl Into<String>) -> Self {
        self.labels.insert(raw.into(), display.into());
        self
    }

    /// Translates one raw label.
    pub fn translate<'a>(&'a self, raw: &'a str) -> &'a str {
        self.labels.get(raw).map(String::as_str).unwrap_or(raw)
    }
}

impl Default for MediaTranslation {
    fn default() -> Self {
        MediaTranslation::identity()
            .with("TV", "Televisión")
            .with("Radio", "Radio")
            .with("Digital", "Digital")
            .with("OOH", "Publicidad Exterior")
            .with("Influencers", "Influencers")
            .with("Social Media", "Redes Sociales")
            .with("Social", "Redes Sociales")
            .with("Experiencial", "Experiencial")
            .with("Experiencias", "Experiencial")
    }
}

#[derive(Debug, Deserialize)]
struct CampaignRow {
    id: u32,
    name: String,
    brand: String,
    agency: String,
    sector: String,
    media: String,
    strategy_type: String,
    launch_date: String,
    tone: String,
    recognition: String,
    description: String,
}

impl CampaignRow {
    fn into_campaign(self, translation: &MediaTranslation) -> Result<Campaign> {
        let launch_date =
            parse_date(&self.launch_date).map_err(|_| SeekerError::InvalidLaunchDate {
                id: self.id,
                value: self.launch_date.clone(),
            })?;

        let media = self
            .media
            .split(MEDIA_SEPARATOR)
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(|label| translation.translate(label).to_string())
            .collect();

        Campaign::new(CampaignFields {
            id: self.id,
            name: self.name,
            brand: self.brand,
            agency: self.agency,
            sector: self.sector,
            media,
            strategy_type: self.strategy_type,
            launch_date,
            tone: self.tone,
            recognition: self.recognition,
            description: self.description,
        })
    }
}

/// Loads the embedded dataset with the default media translation.
pub fn load_embedded() -> Result<Catalog> {
    load_from_reader(EMBEDDED_DATASET.as_bytes(), &MediaTranslation::default())
}

/// Loads campaigns from CSV with the header
/// `id,name,brand,agency,sector,media,strategy_type,launch_date,tone,recognition,description`.
pub fn load_from_reader<R: Read>(reader: R, translation: &MediaTranslation) -> Result<Catalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CampaignRow>() {
        records.push(row?.into_campaign(translation)?);
    }

    debug!(records = records.len(), "loaded campaign catalog");
    Catalog::new(records)
}

//! The campaign record.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{Result, SeekerError};
use crate::field::Field;
use crate::traits::Seekable;
use crate::value::Value;

/// Raw attributes used to construct a [`Campaign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignFields {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub agency: String,
    pub sector: String,
    pub media: Vec<String>,
    pub strategy_type: String,
    pub launch_date: NaiveDate,
    pub tone: String,
    pub recognition: String,
    pub description: String,
}

/// One advertising campaign.
///
/// Campaigns are immutable once built. `launch_year` is derived from
/// `launch_date` at construction and cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Campaign {
    id: u32,
    name: String,
    brand: String,
    agency: String,
    sector: String,
    media: Vec<String>,
    strategy_type: String,
    launch_date: NaiveDate,
    tone: String,
    recognition: String,
    description: String,
    launch_year: i32,
}

impl Campaign {
    /// Builds a campaign, rejecting an empty media list.
    pub fn new(fields: CampaignFields) -> Result<Self> {
        if fields.media.is_empty() {
            return Err(SeekerError::EmptyMedia { id: fields.id });
        }

        Ok(Campaign {
            launch_year: fields.launch_date.year(),
            id: fields.id,
            name: fields.name,
            brand: fields.brand,
            agency: fields.agency,
            sector: fields.sector,
            media: fields.media,
            strategy_type: fields.strategy_type,
            launch_date: fields.launch_date,
            tone: fields.tone,
            recognition: fields.recognition,
            description: fields.description,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Canonical media channel labels, in dataset order.
    pub fn media(&self) -> &[String] {
        &self.media
    }

    pub fn strategy_type(&self) -> &str {
        &self.strategy_type
    }

    pub fn launch_date(&self) -> NaiveDate {
        self.launch_date
    }

    pub fn launch_year(&self) -> i32 {
        self.launch_year
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn recognition(&self) -> &str {
        &self.recognition
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if the campaign runs on `channel` (ignoring case).
    pub fn runs_on(&self, channel: &str) -> bool {
        let channel = channel.to_lowercase();
        self.media.iter().any(|m| m.to_lowercase() == channel)
    }
}

impl Seekable for Campaign {
    fn seeker_field_value(&self, field: Field) -> Value<'_> {
        match field {
            Field::Id => Value::Number(self.id as i64),
            Field::Name => Value::String(&self.name),
            Field::Brand => Value::String(&self.brand),
            Field::Agency => Value::String(&self.agency),
            Field::Sector => Value::String(&self.sector),
            Field::Media => Value::List(&self.media),
            Field::StrategyType => Value::String(&self.strategy_type),
            Field::LaunchDate => Value::Date(self.launch_date),
            Field::Tone => Value::String(&self.tone),
            Field::Recognition => Value::String(&self.recognition),
            Field::Description => Value::String(&self.description),
            Field::LaunchYear => Value::Number(self.launch_year as i64),
        }
    }
}

//! Error types for the seeker crate.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while loading the catalog or building criteria.
///
/// Search and filter never fail: they degrade to "no match" or "no
/// constraint". Errors only surface from loading data and from building
/// criteria under [`CriteriaPolicy::Strict`](crate::CriteriaPolicy::Strict).
#[derive(Debug, Error)]
pub enum SeekerError {
    /// A date string could not be parsed.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A date range whose start is after its end.
    #[error("start date {start} cannot be after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    /// A campaign row carries an unparseable launch date.
    #[error("campaign {id}: invalid launch date '{value}'")]
    InvalidLaunchDate { id: u32, value: String },

    /// A campaign without any media channel.
    #[error("campaign {id} has no media channels")]
    EmptyMedia { id: u32 },

    /// Two campaigns share the same id.
    #[error("duplicate campaign id {0}")]
    DuplicateId(u32),

    /// Field name not recognized.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Field exists but cannot be used as a filter criterion.
    #[error("field '{0}' cannot be used as a filter criterion")]
    UnsupportedCriterion(&'static str),

    /// Criterion payload shape does not fit the field.
    #[error("criterion for '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// Malformed tabular input.
    #[error("malformed campaign data: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;

//! Typed filter criteria.
//!
//! A [`Criteria`] set holds at most one [`Criterion`] per field. Each
//! criterion carries the payload its field needs: a label for exact-match
//! fields, a set of labels for media, a [`DateRange`] for the launch date.
//!
//! [`Criteria::from_raw`] accepts the loosely-typed form a presentation layer
//! produces (field names and text/list/pair values) and decides, through
//! [`CriteriaPolicy`], whether malformed entries are skipped or reported.

use tracing::debug;

use crate::clause::Clause;
use crate::date::{parse_date, DateRange};
use crate::error::{Result, SeekerError};
use crate::field::Field;
use crate::op::Op;
use crate::query::Query;

/// One field-scoped filtering constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Agency equals the label, ignoring case.
    Agency(String),
    /// Sector equals the label, ignoring case.
    Sector(String),
    /// Strategy type equals the label, ignoring case.
    StrategyType(String),
    /// Tone equals the label, ignoring case.
    Tone(String),
    /// Campaign runs on at least one of the channels, ignoring case.
    Media(Vec<String>),
    /// Launch date within the inclusive range.
    LaunchDate(DateRange),
}

impl Criterion {
    /// The field this criterion constrains.
    pub fn field(&self) -> Field {
        match self {
            Criterion::Agency(_) => Field::Agency,
            Criterion::Sector(_) => Field::Sector,
            Criterion::StrategyType(_) => Field::StrategyType,
            Criterion::Tone(_) => Field::Tone,
            Criterion::Media(_) => Field::Media,
            Criterion::LaunchDate(_) => Field::LaunchDate,
        }
    }

    /// Converts the criterion to a query clause.
    pub fn to_clause(&self) -> Clause {
        let field = self.field();
        match self {
            Criterion::Agency(label)
            | Criterion::Sector(label)
            | Criterion::StrategyType(label)
            | Criterion::Tone(label) => Clause::new(field, Op::Eq, label.as_str()),
            Criterion::Media(channels) => Clause::new(field, Op::In, channels.clone()),
            Criterion::LaunchDate(range) => Clause::new(field, Op::Between, *range),
        }
    }
}

/// Loosely-typed criterion value as produced by form widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCriterion {
    /// A single text value (selectbox).
    Text(String),
    /// A list of values (multiselect).
    List(Vec<String>),
    /// A pair of values (date range inputs).
    Pair(String, String),
}

impl RawCriterion {
    fn shape(&self) -> &'static str {
        match self {
            RawCriterion::Text(_) => "text",
            RawCriterion::List(_) => "list",
            RawCriterion::Pair(_, _) => "pair",
        }
    }
}

/// How [`Criteria::from_raw`] treats malformed entries.
///
/// Malformed means: unknown field, field that cannot be filtered on,
/// payload of the wrong shape, or an unparseable date bound. An inverted
/// date range is always an error, whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CriteriaPolicy {
    /// Skip malformed entries; they impose no constraint.
    #[default]
    Lenient,
    /// Report the first malformed entry as an error.
    Strict,
}

impl CriteriaPolicy {
    /// Resolves a problem with one entry: `Ok(())` means "skip it".
    fn resolve(self, err: SeekerError) -> Result<()> {
        if matches!(err, SeekerError::InvertedDateRange { .. }) {
            return Err(err);
        }
        match self {
            CriteriaPolicy::Lenient => {
                debug!(reason = %err, "skipping filter criterion");
                Ok(())
            }
            CriteriaPolicy::Strict => Err(err),
        }
    }
}

/// A conjunction of criteria, at most one per field.
///
/// Setting a criterion for a field that already has one replaces it.
///
/// ```
/// use campaign_seeker::{Criteria, DateRange};
///
/// let criteria = Criteria::new()
///     .sector("Bebidas")
///     .media(["Publicidad Exterior", "Radio"])
///     .launch_between(DateRange::parse("2023-01-01", "2024-12-31").unwrap());
/// assert_eq!(criteria.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    items: Vec<Criterion>,
}

impl Criteria {
    pub fn new() -> Self {
        Criteria::default()
    }

    /// Adds a criterion, replacing any existing one for the same field.
    pub fn insert(&mut self, criterion: Criterion) {
        let field = criterion.field();
        match self.items.iter_mut().find(|c| c.field() == field) {
            Some(existing) => *existing = criterion,
            None => self.items.push(criterion),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.insert(criterion);
        self
    }

    pub fn agency(self, label: impl Into<String>) -> Self {
        self.with(Criterion::Agency(label.into()))
    }

    pub fn sector(self, label: impl Into<String>) -> Self {
        self.with(Criterion::Sector(label.into()))
    }

    pub fn strategy_type(self, label: impl Into<String>) -> Self {
        self.with(Criterion::StrategyType(label.into()))
    }

    pub fn tone(self, label: impl Into<String>) -> Self {
        self.with(Criterion::Tone(label.into()))
    }

    /// Adds a media criterion. An empty channel list adds nothing.
    pub fn media<I, S>(self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let channels: Vec<String> = channels.into_iter().map(Into::into).collect();
        if channels.is_empty() {
            debug!("empty media selection imposes no constraint");
            return self;
        }
        self.with(Criterion::Media(channels))
    }

    pub fn launch_between(self, range: DateRange) -> Self {
        self.with(Criterion::LaunchDate(range))
    }

    /// Builds criteria from loosely-typed `(field name, value)` entries.
    ///
    /// - exact-match fields (`agency`, `sector`, `strategy_type`, `tone`)
    ///   take [`RawCriterion::Text`];
    /// - `media` takes [`RawCriterion::List`]; an empty list is no constraint;
    /// - `launch_date` takes [`RawCriterion::Pair`] or a two-element
    ///   [`RawCriterion::List`] of dates.
    ///
    /// Anything else is malformed and handled by `policy`. An inverted date
    /// range is always an error.
    pub fn from_raw<I, K>(entries: I, policy: CriteriaPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (K, RawCriterion)>,
        K: AsRef<str>,
    {
        let mut criteria = Criteria::new();

        for (name, raw) in entries {
            let name = name.as_ref();
            let Some(field) = Field::parse(name) else {
                policy.resolve(SeekerError::UnknownField(name.to_string()))?;
                continue;
            };

            match criterion_from_raw(field, raw) {
                Ok(Some(criterion)) => criteria.insert(criterion),
                Ok(None) => {}
                Err(err) => policy.resolve(err)?,
            }
        }

        Ok(criteria)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the criterion for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&Criterion> {
        self.items.iter().find(|c| c.field() == field)
    }

    /// Compiles the criteria into an AND query.
    pub fn to_query(&self) -> Query {
        self.items
            .iter()
            .fold(Query::new(), |query, criterion| {
                query.and_clause(criterion.to_clause())
            })
            .build()
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn criterion_from_raw(field: Field, raw: RawCriterion) -> Result<Option<Criterion>> {
    let mismatch = |expected: &'static str, raw: &RawCriterion| SeekerError::TypeMismatch {
        field: field.as_str(),
        expected,
        actual: raw.shape(),
    };

    match field {
        Field::Agency | Field::Sector | Field::StrategyType | Field::Tone => match raw {
            RawCriterion::Text(label) => Ok(Some(match field {
                Field::Agency => Criterion::Agency(label),
                Field::Sector => Criterion::Sector(label),
                Field::StrategyType => Criterion::StrategyType(label),
                _ => Criterion::Tone(label),
            })),
            other => Err(mismatch("text", &other)),
        },
        Field::Media => match raw {
            RawCriterion::List(channels) if channels.is_empty() => {
                debug!("empty media selection imposes no constraint");
                Ok(None)
            }
            RawCriterion::List(channels) => Ok(Some(Criterion::Media(channels))),
            other => Err(mismatch("list", &other)),
        },
        Field::LaunchDate => {
            let (start, end) = match raw {
                RawCriterion::Pair(start, end) => (start, end),
                RawCriterion::List(bounds) => match <[String; 2]>::try_from(bounds) {
                    Ok([start, end]) => (start, end),
                    Err(bounds) => {
                        return Err(mismatch("pair of dates", &RawCriterion::List(bounds)))
                    }
                },
                other => return Err(mismatch("pair of dates", &other)),
            };
            let range = DateRange::new(parse_date(&start)?, parse_date(&end)?)?;
            Ok(Some(Criterion::LaunchDate(range)))
        }
        other => Err(SeekerError::UnsupportedCriterion(other.as_str())),
    }
}

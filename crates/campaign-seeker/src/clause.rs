//! Clause types for query predicates.
//!
//! A [`Clause`] represents a single filter predicate: a field, an operator,
//! and a comparison value.

use crate::date::DateRange;
use crate::field::Field;
use crate::op::Op;
use crate::value::Value;

/// A single filter predicate.
///
/// Text payloads are case-folded once, when the clause is built, so matching
/// only folds the field side.
///
/// # Example
///
/// ```
/// use campaign_seeker::{Clause, Field, Op, Value};
///
/// let clause = Clause::new(Field::Name, Op::Contains, "PERÚ");
/// assert!(clause.matches(&Value::String("Sabor a Perú")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The field to compare.
    pub field: Field,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field,
            op,
            value: value.into().folded(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Returns `None` when the clause does not apply to the value at all:
    /// the operator does not fit the clause value, or the field holds a kind
    /// of value the clause cannot compare (a text clause against a date, say).
    /// A missing value is a plain non-match.
    pub fn evaluate(&self, field_value: &Value<'_>) -> Option<bool> {
        match (self.op, &self.value, field_value) {
            (_, _, Value::None) => Some(false),

            (Op::Eq, ClauseValue::Text(expected), Value::String(s)) => {
                Some(s.to_lowercase() == *expected)
            }

            (Op::Contains, ClauseValue::Text(needle), Value::String(s)) => {
                Some(s.to_lowercase().contains(needle.as_str()))
            }
            (Op::Contains, ClauseValue::Text(needle), Value::List(items)) => Some(
                items
                    .iter()
                    .any(|item| item.to_lowercase().contains(needle.as_str())),
            ),

            (Op::In, ClauseValue::TextSet(wanted), Value::String(s)) => {
                Some(wanted.contains(&s.to_lowercase()))
            }
            (Op::In, ClauseValue::TextSet(wanted), Value::List(items)) => Some(
                items
                    .iter()
                    .any(|item| wanted.contains(&item.to_lowercase())),
            ),

            (Op::Between, ClauseValue::DateRange(range), Value::Date(date)) => {
                Some(range.contains(*date))
            }

            _ => None,
        }
    }

    /// Returns `true` if the value matches. Inapplicable clauses never match.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        self.evaluate(field_value).unwrap_or(false)
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the record, `ClauseValue` owns its
/// data so it can be stored in query definitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Single text value.
    Text(String),
    /// Set of text values (for `In`).
    TextSet(Vec<String>),
    /// Inclusive date range (for `Between`).
    DateRange(DateRange),
}

impl ClauseValue {
    fn folded(self) -> Self {
        match self {
            ClauseValue::Text(s) => ClauseValue::Text(s.to_lowercase()),
            ClauseValue::TextSet(set) => {
                ClauseValue::TextSet(set.into_iter().map(|s| s.to_lowercase()).collect())
            }
            range @ ClauseValue::DateRange(_) => range,
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for ClauseValue {
    fn from(set: Vec<String>) -> Self {
        ClauseValue::TextSet(set)
    }
}

impl From<Vec<&str>> for ClauseValue {
    fn from(set: Vec<&str>) -> Self {
        ClauseValue::TextSet(set.into_iter().map(str::to_string).collect())
    }
}

impl From<DateRange> for ClauseValue {
    fn from(range: DateRange) -> Self {
        ClauseValue::DateRange(range)
    }
}

//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder API for constructing queries
//! and methods for executing them against collections.

use crate::clause::{Clause, ClauseValue};
use crate::date::DateRange;
use crate::field::Field;
use crate::op::Op;
use crate::value::Value;

/// A query for filtering collections.
///
/// Queries consist of two clause groups:
/// - **AND**: every applicable clause must match
/// - **OR**: at least one clause must match (or none if empty)
///
/// The overall match logic is:
/// ```text
/// match = (all applicable AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
/// ```
///
/// An AND clause that does not apply to the field's value (see
/// [`Clause::evaluate`]) is skipped rather than failing the record. An OR
/// clause that does not apply simply does not match.
///
/// # Example
///
/// ```
/// use campaign_seeker::{Field, Query, Value};
///
/// struct Spot {
///     name: String,
///     agency: String,
/// }
///
/// fn accessor<'a>(spot: &'a Spot, field: Field) -> Value<'a> {
///     match field {
///         Field::Name => Value::String(&spot.name),
///         Field::Agency => Value::String(&spot.agency),
///         _ => Value::None,
///     }
/// }
///
/// let spots = vec![
///     Spot { name: "Sabor a Perú".into(), agency: "McCann".into() },
///     Spot { name: "Muévete".into(), agency: "Digitas".into() },
/// ];
///
/// let query = Query::new()
///     .and_eq(Field::Agency, "mccann")
///     .or_contains(Field::Name, "perú")
///     .build();
///
/// let results = query.filter(&spots, accessor);
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Generic clause builders
    // ========================================================================

    /// Adds an AND clause.
    pub fn and(mut self, field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an OR clause.
    pub fn or(mut self, field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds a prebuilt clause to the AND group.
    pub fn and_clause(mut self, clause: Clause) -> Self {
        self.and_clauses.push(clause);
        self
    }

    // ========================================================================
    // Shorthand methods
    // ========================================================================

    /// Adds an AND case-insensitive equality clause.
    pub fn and_eq(self, field: Field, value: &str) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds an AND set-membership clause.
    pub fn and_in<I, S>(self, field: Field, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: Vec<String> = values.into_iter().map(Into::into).collect();
        self.and(field, Op::In, set)
    }

    /// Adds an AND inclusive date-range clause.
    pub fn and_between(self, field: Field, range: DateRange) -> Self {
        self.and(field, Op::Between, range)
    }

    /// Adds an OR substring clause.
    pub fn or_contains(self, field: Field, value: &str) -> Self {
        self.or(field, Op::Contains, value)
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    /// Returns `true` if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this query.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, Field) -> Value<'a>,
    {
        let and_pass = self.and_clauses.iter().all(|clause| {
            clause
                .evaluate(&accessor(item, clause.field))
                .unwrap_or(true)
        });

        if !and_pass {
            return false;
        }

        self.or_clauses.is_empty()
            || self
                .or_clauses
                .iter()
                .any(|clause| clause.matches(&accessor(item, clause.field)))
    }

    /// Filters a collection, returning references to matching items in their
    /// original relative order.
    pub fn filter<'a, T, I, F>(&self, items: I, accessor: F) -> Vec<&'a T>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        for<'b> F: Fn(&'b T, Field) -> Value<'b>,
    {
        items
            .into_iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect()
    }
}

//! Comparison operators for query clauses.
//!
//! The [`Op`] enum defines the supported comparison operators. Each operator
//! pairs with one kind of clause value; text comparisons are case-insensitive.

/// Comparison operator for a query clause.
///
/// - `Eq`: exact match of text, ignoring case
/// - `Contains`: substring match of text (or of any element of a list)
/// - `In`: membership of the field (or of any element of a list) in a set
/// - `Between`: date within an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Case-insensitive equality.
    Eq,
    /// Case-insensitive substring.
    Contains,
    /// Case-insensitive set membership; any list element may satisfy it.
    In,
    /// Inclusive date range.
    Between,
}

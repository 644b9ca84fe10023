//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the value of a field extracted from a record
//! at query time. Text and lists of text are borrowed from the record.

use chrono::NaiveDate;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use campaign_seeker::{Field, Value};
///
/// struct Spot {
///     name: String,
///     channels: Vec<String>,
/// }
///
/// fn accessor<'a>(spot: &'a Spot, field: Field) -> Value<'a> {
///     match field {
///         Field::Name => Value::String(&spot.name),
///         Field::Media => Value::List(&spot.channels),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Single text value.
    String(&'a str),
    /// Multi-valued text attribute (treated as an unordered set).
    List(&'a [String]),
    /// Integer value.
    Number(i64),
    /// Calendar date.
    Date(NaiveDate),
    /// Field not present, null, or unsupported.
    None,
}

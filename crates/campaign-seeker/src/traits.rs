//! The [`Seekable`] trait: field access for the query engine.

use crate::field::Field;
use crate::value::Value;

/// Trait for records that can be searched and filtered.
///
/// # Example
///
/// ```
/// use campaign_seeker::{Field, Seekable, Value};
///
/// struct Spot {
///     name: String,
///     year: i32,
/// }
///
/// impl Seekable for Spot {
///     fn seeker_field_value(&self, field: Field) -> Value<'_> {
///         match field {
///             Field::Name => Value::String(&self.name),
///             Field::LaunchYear => Value::Number(self.year as i64),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of a field for query comparison, or [`Value::None`]
    /// if the record does not carry it.
    fn seeker_field_value(&self, field: Field) -> Value<'_>;

    /// Returns an accessor function suitable for use with
    /// [`Query::filter`](crate::Query::filter).
    fn accessor<'a>(item: &'a Self, field: Field) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

//! Keyword search across text fields.
//!
//! A keyword matches a record when it is a case-insensitive substring of at
//! least one requested field. For the media field, any single channel label
//! may contain it. Fields that hold no text (`id`, `launch_date`,
//! `launch_year`) never match.

use tracing::{debug, trace};

use crate::field::Field;
use crate::query::Query;
use crate::traits::Seekable;

/// Fields the dashboard searches when none are configured.
pub const DEFAULT_SEARCH_FIELDS: [Field; 4] = [
    Field::Name,
    Field::Description,
    Field::Recognition,
    Field::Tone,
];

/// Searches `records` for `keyword` in the named fields.
///
/// Unknown field names are ignored. When no requested field is recognized
/// the result is empty. Matching records keep their input order.
///
/// ```
/// use campaign_seeker::{loader, search};
///
/// let catalog = loader::load_embedded().unwrap();
/// let hits = search("perú", &["name", "description"], &catalog);
/// assert!(hits.iter().all(|c| {
///     c.name().to_lowercase().contains("perú")
///         || c.description().to_lowercase().contains("perú")
/// }));
/// ```
pub fn search<'a, T, I, S>(keyword: &str, fields: &[S], records: I) -> Vec<&'a T>
where
    T: Seekable + 'a,
    I: IntoIterator<Item = &'a T>,
    S: AsRef<str>,
{
    let resolved: Vec<Field> = fields
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let field = Field::parse(name);
            if field.is_none() {
                debug!(field = name, "ignoring unknown search field");
            }
            field
        })
        .collect();

    search_fields(keyword, &resolved, records)
}

/// Searches `records` for `keyword` in the given fields.
pub fn search_fields<'a, T, I>(keyword: &str, fields: &[Field], records: I) -> Vec<&'a T>
where
    T: Seekable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let searchable: Vec<Field> = fields
        .iter()
        .copied()
        .filter(|field| {
            let text = field.is_text() || field.is_multi_valued();
            if !text {
                debug!(%field, "field holds no text; not searched");
            }
            text
        })
        .collect();

    if searchable.is_empty() {
        debug!(keyword, "no searchable fields requested");
        return Vec::new();
    }

    let query = keyword_query(keyword, &searchable);
    let results = query.filter(records, T::accessor);
    trace!(keyword, matches = results.len(), "keyword search");
    results
}

/// Builds the OR query a keyword search runs.
pub fn keyword_query(keyword: &str, fields: &[Field]) -> Query {
    let keyword = keyword.to_lowercase();
    fields
        .iter()
        .fold(Query::new(), |query, field| query.or_contains(*field, &keyword))
        .build()
}

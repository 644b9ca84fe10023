//! Criteria filtering.

use tracing::trace;

use crate::criteria::Criteria;
use crate::traits::Seekable;

/// Keeps the records that satisfy every criterion.
///
/// Records keep their input order, so `filter` chains after
/// [`search`](crate::search()) and is idempotent: filtering a filtered view by
/// the same criteria returns the same view. Empty criteria keep everything.
///
/// ```
/// use campaign_seeker::{filter, loader, Criteria};
///
/// let catalog = loader::load_embedded().unwrap();
/// let drinks = filter(&catalog, &Criteria::new().sector("bebidas"));
/// let ids: Vec<u32> = drinks.iter().map(|c| c.id()).collect();
/// assert_eq!(ids, vec![2, 5, 15]);
/// ```
pub fn filter<'a, T, I>(records: I, criteria: &Criteria) -> Vec<&'a T>
where
    T: Seekable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let results = criteria.to_query().filter(records, T::accessor);
    trace!(
        criteria = criteria.len(),
        matches = results.len(),
        "criteria filter"
    );
    results
}

//! Campaign seeker - search, filter and summarize an advertising campaign
//! catalog held in memory.
//!
//! The crate provides:
//!
//! - [`Catalog`]: the immutable record store, passed explicitly to every
//!   operation
//! - [`search()`]: case-insensitive keyword search across text fields and the
//!   multi-valued media field (OR across fields)
//! - [`filter()`]: typed [`Criteria`] combined with AND (exact labels, media
//!   membership, inclusive date ranges)
//! - [`Summary`]: counts, histograms and a year × strategy trend matrix
//! - [`loader`]: parsing of the embedded CSV dataset
//!
//! # Quick Start
//!
//! ```rust
//! use campaign_seeker::{filter, loader, search, Criteria, DateRange, Summary};
//!
//! let catalog = loader::load_embedded().unwrap();
//!
//! let hits = search("lápiz", &["recognition"], &catalog);
//! let criteria = Criteria::new()
//!     .media(["Televisión"])
//!     .launch_between(DateRange::parse("2023-01-01", "2023-12-31").unwrap());
//! let view = filter(hits.iter().copied(), &criteria);
//!
//! let summary = Summary::compute(view.iter().copied());
//! assert_eq!(summary.total, view.len());
//! ```
//!
//! # Query Semantics
//!
//! Search and filter both compile to a [`Query`] of [`Clause`]s:
//!
//! ```text
//! match = (all applicable AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//! ```
//!
//! | Operator  | Field value        | Matches when                                |
//! |-----------|--------------------|---------------------------------------------|
//! | `Eq`      | text               | equal ignoring case                         |
//! | `Contains`| text / list        | substring ignoring case (any list element)  |
//! | `In`      | text / list        | some element is in the set, ignoring case   |
//! | `Between` | date               | inside the inclusive range                  |
//!
//! Results always keep the input order, so every view can be fed into the
//! next stage.

mod campaign;
mod catalog;
mod clause;
mod criteria;
mod date;
mod error;
mod field;
mod filter;
pub mod loader;
mod op;
mod query;
mod search;
mod summary;
mod traits;
mod value;

// Re-export public API
pub use campaign::{Campaign, CampaignFields};
pub use catalog::Catalog;
pub use clause::{Clause, ClauseValue};
pub use criteria::{Criteria, CriteriaPolicy, Criterion, RawCriterion};
pub use date::{parse_date, DateRange};
pub use error::{Result, SeekerError};
pub use field::Field;
pub use filter::filter;
pub use op::Op;
pub use query::Query;
pub use search::{keyword_query, search, search_fields, DEFAULT_SEARCH_FIELDS};
pub use summary::{Bucket, Share, StrategyTrend, Summary, DEFAULT_TOP_STRATEGIES};
pub use traits::Seekable;
pub use value::Value;

//! One dashboard pass over a catalog.
//!
//! Every invocation recomputes from scratch: keyword search over the whole
//! catalog, then the criteria filter over the search results, then the
//! summary over what is left. Nothing is kept between passes.

use campaign_seeker::{
    filter, search, search_fields, Campaign, Catalog, Criteria, CriteriaPolicy, Field,
    RawCriterion, Result, SeekerError, Summary,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::FilterArgs;
use crate::config::Settings;

const DATE_FIELD: &str = "launch_date";

/// Outcome of one pass.
#[derive(Debug, Clone)]
pub struct Pass<'c> {
    /// Matching campaigns in catalog order.
    pub records: Vec<&'c Campaign>,
    pub summary: Summary,
    /// Validation messages for the user; the pass still ran.
    pub warnings: Vec<String>,
}

impl<'c> Pass<'c> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn list_report(&self) -> ListReport<'_> {
        ListReport {
            total: self.summary.total,
            distinct_agencies: self.summary.distinct_agencies,
            distinct_sectors: self.summary.distinct_sectors,
            campaigns: &self.records,
        }
    }
}

/// Serialized form of `campaigns list`.
#[derive(Debug, Serialize)]
pub struct ListReport<'a> {
    pub total: usize,
    pub distinct_agencies: usize,
    pub distinct_sectors: usize,
    pub campaigns: &'a [&'a Campaign],
}

/// Values offered by each filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionLists {
    pub agencies: Vec<String>,
    pub sectors: Vec<String>,
    pub media: Vec<String>,
    pub earliest_launch: Option<NaiveDate>,
    pub latest_launch: Option<NaiveDate>,
}

impl OptionLists {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let owned = |values: Vec<&str>| values.into_iter().map(str::to_string).collect();
        let bounds = catalog.date_bounds();
        OptionLists {
            agencies: owned(catalog.agencies()),
            sectors: owned(catalog.sectors()),
            media: owned(catalog.media_channels()),
            earliest_launch: bounds.map(|(min, _)| min),
            latest_launch: bounds.map(|(_, max)| max),
        }
    }
}

/// Runs search, filter and summary for one set of flags.
///
/// Lenient settings never fail here except on an inverted date range,
/// which is turned into a warning: the date criterion is dropped and the
/// other criteria still apply.
pub fn run_pass<'c>(
    catalog: &'c Catalog,
    args: &FilterArgs,
    settings: &Settings,
) -> Result<Pass<'c>> {
    let mut warnings = Vec::new();

    let searched = keyword_stage(catalog, args, settings)?;
    let criteria = build_criteria(catalog, args, settings.policy, &mut warnings)?;
    let records = filter(searched.iter().copied(), &criteria);
    let summary = Summary::with_top_strategies(records.iter().copied(), settings.top_strategies);

    info!(
        searched = searched.len(),
        criteria = criteria.len(),
        matches = records.len(),
        "dashboard pass"
    );

    Ok(Pass {
        records,
        summary,
        warnings,
    })
}

fn keyword_stage<'c>(
    catalog: &'c Catalog,
    args: &FilterArgs,
    settings: &Settings,
) -> Result<Vec<&'c Campaign>> {
    let keyword = match args.keyword.as_deref() {
        None | Some("") => return Ok(catalog.iter().collect()),
        Some(keyword) => keyword,
    };

    let names: &[String] = if args.fields.is_empty() {
        &settings.search_fields
    } else {
        &args.fields
    };

    match settings.policy {
        CriteriaPolicy::Strict => {
            let fields = names
                .iter()
                .map(|name| name.parse::<Field>())
                .collect::<Result<Vec<_>>>()?;
            Ok(search_fields(keyword, &fields, catalog))
        }
        CriteriaPolicy::Lenient => Ok(search(keyword, names, catalog)),
    }
}

fn build_criteria(
    catalog: &Catalog,
    args: &FilterArgs,
    policy: CriteriaPolicy,
    warnings: &mut Vec<String>,
) -> Result<Criteria> {
    let entries = raw_entries(catalog, args);

    match Criteria::from_raw(entries.iter().cloned(), policy) {
        Err(err @ SeekerError::InvertedDateRange { .. }) => {
            debug!(%err, "dropping inverted date range");
            warnings.push(format!("{err}; the date filter was not applied"));
            Criteria::from_raw(
                entries.into_iter().filter(|(name, _)| *name != DATE_FIELD),
                policy,
            )
        }
        other => other,
    }
}

/// Flags as `(field, value)` entries, the shape form widgets produce.
fn raw_entries(catalog: &Catalog, args: &FilterArgs) -> Vec<(&'static str, RawCriterion)> {
    let mut entries = Vec::new();

    let labels = [
        ("agency", &args.agency),
        ("sector", &args.sector),
        ("strategy_type", &args.strategy),
        ("tone", &args.tone),
    ];
    for (name, value) in labels {
        if let Some(value) = value {
            entries.push((name, RawCriterion::Text(value.clone())));
        }
    }

    if !args.media.is_empty() {
        entries.push(("media", RawCriterion::List(args.media.clone())));
    }

    if args.from.is_some() || args.to.is_some() {
        let bounds = catalog.date_bounds();
        let from = args
            .from
            .clone()
            .or_else(|| bounds.map(|(min, _)| min.to_string()));
        let to = args
            .to
            .clone()
            .or_else(|| bounds.map(|(_, max)| max.to_string()));
        match (from, to) {
            (Some(from), Some(to)) => entries.push((DATE_FIELD, RawCriterion::Pair(from, to))),
            _ => debug!("no date bounds available; date filter skipped"),
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_seeker::loader;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    fn catalog() -> Catalog {
        loader::load_embedded().unwrap()
    }

    fn ids(pass: &Pass<'_>) -> Vec<u32> {
        pass.records.iter().map(|c| c.id()).collect()
    }

    fn strict() -> Settings {
        Settings {
            policy: CriteriaPolicy::Strict,
            ..Settings::default()
        }
    }

    #[test]
    fn no_flags_is_whole_catalog() {
        let catalog = catalog();
        let pass = run_pass(&catalog, &FilterArgs::default(), &Settings::default()).unwrap();
        assert_eq!(pass.records.len(), 20);
        assert_eq!(pass.summary.total, 20);
        assert!(pass.warnings.is_empty());
    }

    #[test]
    fn keyword_then_criteria() {
        let catalog = catalog();
        let args = FilterArgs {
            keyword: Some("awards".into()),
            sector: Some("Finanzas".into()),
            ..FilterArgs::default()
        };
        let pass = run_pass(&catalog, &args, &Settings::default()).unwrap();
        assert_eq!(ids(&pass), vec![4, 18]);
        assert_eq!(pass.summary.total, 2);
    }

    #[test]
    fn field_flags_replace_configured_fields() {
        let catalog = catalog();
        let args = FilterArgs {
            keyword: Some("finanzas".into()),
            fields: vec!["sector".into()],
            ..FilterArgs::default()
        };
        let pass = run_pass(&catalog, &args, &Settings::default()).unwrap();
        assert_eq!(ids(&pass), vec![4, 9, 18, 20]);
    }

    #[test]
    fn open_ended_range_uses_catalog_bounds() {
        let catalog = catalog();
        let args = FilterArgs {
            from: Some("2024-01-01".into()),
            ..FilterArgs::default()
        };
        let pass = run_pass(&catalog, &args, &Settings::default()).unwrap();
        assert!(!pass.is_empty());
        assert!(pass.records.iter().all(|c| c.launch_year() == 2024));
    }

    #[test]
    fn inverted_range_warns_and_keeps_other_criteria() {
        let catalog = catalog();
        let args = FilterArgs {
            sector: Some("Bebidas".into()),
            from: Some("2024-06-01".into()),
            to: Some("2022-06-20".into()),
            ..FilterArgs::default()
        };
        let pass = run_pass(&catalog, &args, &Settings::default()).unwrap();
        assert_eq!(ids(&pass), vec![2, 5, 15]);
        assert_eq!(pass.warnings.len(), 1);
        assert!(pass.warnings[0].contains("2024-06-01"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn inverted_range_is_not_logged_at_default_level() {
        let catalog = catalog();
        let args = FilterArgs {
            from: Some("2024-06-01".into()),
            to: Some("2022-06-20".into()),
            ..FilterArgs::default()
        };
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(crate::logging::level_for(0)))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let pass = tracing::subscriber::with_default(subscriber, || {
            run_pass(&catalog, &args, &Settings::default()).unwrap()
        });

        assert_eq!(pass.warnings.len(), 1);
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn lenient_ignores_bad_date_and_unknown_field() {
        let catalog = catalog();
        let args = FilterArgs {
            keyword: Some("cannes".into()),
            fields: vec!["recognition".into(), "colour".into()],
            from: Some("someday".into()),
            ..FilterArgs::default()
        };
        let pass = run_pass(&catalog, &args, &Settings::default()).unwrap();
        assert_eq!(ids(&pass), vec![1, 5, 15, 19]);
    }

    #[test]
    fn strict_rejects_bad_date() {
        let catalog = catalog();
        let args = FilterArgs {
            to: Some("someday".into()),
            ..FilterArgs::default()
        };
        let err = run_pass(&catalog, &args, &strict()).unwrap_err();
        assert!(matches!(err, SeekerError::InvalidDate(_)));
    }

    #[test]
    fn strict_rejects_unknown_search_field() {
        let catalog = catalog();
        let args = FilterArgs {
            keyword: Some("cannes".into()),
            fields: vec!["colour".into()],
            ..FilterArgs::default()
        };
        let err = run_pass(&catalog, &args, &strict()).unwrap_err();
        assert!(matches!(err, SeekerError::UnknownField(ref name) if name == "colour"));
    }

    #[test]
    fn no_match_is_an_empty_pass() {
        let catalog = catalog();
        let args = FilterArgs {
            sector: Some("Bebidas".into()),
            agency: Some("McCann".into()),
            ..FilterArgs::default()
        };
        let pass = run_pass(&catalog, &args, &Settings::default()).unwrap();
        assert!(pass.is_empty());
        assert!(pass.summary.is_empty());
    }

    #[test]
    fn top_strategies_setting_is_applied() {
        let catalog = catalog();
        let settings = Settings {
            top_strategies: 2,
            ..Settings::default()
        };
        let pass = run_pass(&catalog, &FilterArgs::default(), &settings).unwrap();
        assert_eq!(pass.summary.strategy_trend.strategies.len(), 2);
    }

    #[test]
    fn option_lists_from_embedded_data() {
        let options = OptionLists::from_catalog(&catalog());
        assert_eq!(options.agencies.len(), 9);
        assert_eq!(options.sectors.len(), 11);
        assert_eq!(options.media.len(), 7);
        assert_eq!(
            options.earliest_launch,
            NaiveDate::from_ymd_opt(2022, 6, 20)
        );
        assert_eq!(options.latest_launch, NaiveDate::from_ymd_opt(2024, 6, 1));
    }
}

//! Aggregation summary over a (possibly filtered) set of campaigns.
//!
//! Everything is recomputed from the records handed in; nothing is cached.
//! Histograms are ordered by descending count with ties kept in first-seen
//! order.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::campaign::Campaign;

/// Number of strategy types tracked by the trend matrix by default.
pub const DEFAULT_TOP_STRATEGIES: usize = 5;

/// A labelled count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

/// A labelled count with its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: usize,
    pub proportion: f64,
}

/// Campaign counts per launch year for the most frequent strategy types.
///
/// `counts[y][s]` is the number of campaigns launched in `years[y]` with
/// strategy type `strategies[s]`. Missing combinations are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StrategyTrend {
    pub years: Vec<i32>,
    pub strategies: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl StrategyTrend {
    fn compute(records: &[&Campaign], top: usize) -> Self {
        let ranked = ranked_counts(records.iter().map(|c| c.strategy_type()));
        let mut strategies: Vec<String> = ranked
            .into_iter()
            .take(top)
            .map(|bucket| bucket.label)
            .collect();
        strategies.sort();

        let tracked: Vec<&&Campaign> = records
            .iter()
            .filter(|c| strategies.iter().any(|s| s == c.strategy_type()))
            .collect();

        let years: Vec<i32> = tracked
            .iter()
            .map(|c| c.launch_year())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut counts = vec![vec![0; strategies.len()]; years.len()];
        for campaign in tracked {
            let y = years.iter().position(|&y| y == campaign.launch_year());
            let s = strategies
                .iter()
                .position(|s| s == campaign.strategy_type());
            if let (Some(y), Some(s)) = (y, s) {
                counts[y][s] += 1;
            }
        }

        StrategyTrend {
            years,
            strategies,
            counts,
        }
    }

    /// Count for one (year, strategy) cell; zero when either is not tracked.
    pub fn count(&self, year: i32, strategy: &str) -> usize {
        let y = self.years.iter().position(|&y| y == year);
        let s = self.strategies.iter().position(|s| s == strategy);
        match (y, s) {
            (Some(y), Some(s)) => self.counts[y][s],
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Metrics and groupings for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub distinct_agencies: usize,
    pub distinct_sectors: usize,
    pub by_agency: Vec<Bucket>,
    pub by_sector: Vec<Share>,
    pub by_media: Vec<Bucket>,
    pub strategy_trend: StrategyTrend,
}

impl Summary {
    /// Summarizes `records`, tracking the default number of strategy types.
    ///
    /// ```
    /// use campaign_seeker::{loader, Summary};
    ///
    /// let catalog = loader::load_embedded().unwrap();
    /// let summary = Summary::compute(&catalog);
    /// assert_eq!(summary.total, 20);
    /// assert_eq!(summary.by_media[0].label, "Digital");
    /// ```
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Campaign>,
    {
        Summary::with_top_strategies(records, DEFAULT_TOP_STRATEGIES)
    }

    /// Summarizes `records`, tracking the `top` most frequent strategy types.
    pub fn with_top_strategies<'a, I>(records: I, top: usize) -> Self
    where
        I: IntoIterator<Item = &'a Campaign>,
    {
        let records: Vec<&Campaign> = records.into_iter().collect();
        let total = records.len();

        let by_agency = ranked_counts(records.iter().map(|c| c.agency()));
        let by_sector: Vec<Share> = ranked_counts(records.iter().map(|c| c.sector()))
            .into_iter()
            .map(|bucket| Share {
                proportion: bucket.count as f64 / total as f64,
                label: bucket.label,
                count: bucket.count,
            })
            .collect();
        let by_media = ranked_counts(
            records
                .iter()
                .flat_map(|c| c.media().iter().map(String::as_str)),
        );

        Summary {
            total,
            distinct_agencies: by_agency.len(),
            distinct_sectors: by_sector.len(),
            by_agency,
            by_sector,
            by_media,
            strategy_trend: StrategyTrend::compute(&records, top),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Counts labels, ordered by descending count then first appearance.
fn ranked_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<Bucket> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => buckets[i].count += 1,
            None => {
                index.insert(label, buckets.len());
                buckets.push(Bucket {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

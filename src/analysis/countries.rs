//! Per-country provider counts
//!
//! Countries are ranked by provider count, highest first. Ties keep the order
//! in which each country was first encountered in the register, so the ranking
//! is fully determined by the input.

use crate::constants::country_name;
use crate::models::{CountrySummary, RawRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Home-country breakdown of a deduplicated register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryBreakdown {
    /// Ranked countries, empty codes excluded
    pub countries: Vec<CountrySummary>,
    /// Records with no home country in either column
    pub unknown: usize,
}

impl CountryBreakdown {
    /// Distinct non-empty home countries
    pub fn distinct_countries(&self) -> usize {
        self.countries.len()
    }

    /// Sum of all bucket counts including the unknown bucket
    pub fn total(&self) -> usize {
        self.countries.iter().map(|c| c.count).sum::<usize>() + self.unknown
    }
}

/// Count records per home country
pub fn count_home_countries(records: &[RawRecord]) -> CountryBreakdown {
    let mut unknown = 0usize;
    let codes = records.iter().filter_map(|record| {
        let code = record.home_country();
        if code.is_empty() {
            unknown += 1;
            None
        } else {
            Some(code)
        }
    });

    let countries = rank_countries(codes);

    if unknown > 0 {
        warn!(
            "{} records have no home member state and are excluded from the country breakdown",
            unknown
        );
    }
    debug!("Home countries: {} distinct", countries.len());

    CountryBreakdown { countries, unknown }
}

/// Rank country codes by frequency, resolving display names.
///
/// Sorting is stable, so codes with equal counts stay in first-seen order.
pub fn rank_countries<'a>(codes: impl IntoIterator<Item = &'a str>) -> Vec<CountrySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(&str, usize)> = Vec::new();

    for code in codes {
        match index.get(code) {
            Some(&position) => tallies[position].1 += 1,
            None => {
                index.insert(code, tallies.len());
                tallies.push((code, 1));
            }
        }
    }

    tallies.sort_by(|a, b| b.1.cmp(&a.1));

    tallies
        .into_iter()
        .map(|(code, count)| CountrySummary {
            code: code.to_string(),
            name: country_name(code).to_string(),
            count,
        })
        .collect()
}

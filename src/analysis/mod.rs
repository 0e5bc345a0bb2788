//! Register aggregation
//!
//! Turns the raw register rows into the summary structures shown on the
//! dashboard. Every step is a pure function of its input:
//!
//! 1. [`dedup`] - one record per LEI, first occurrence wins
//! 2. [`countries`] - provider counts per home member state
//! 3. [`cross_border`] - domestic versus passporting providers for a target state
//! 4. [`services`] - keyword classification into ten service categories
//! 5. [`directory`] - sorted listing of every provider
//!
//! # Example Usage
//!
//! ```rust
//! use casp_dashboard::analysis::RegisterAnalyzer;
//! use casp_dashboard::models::RawRecord;
//!
//! let rows = vec![RawRecord::from_pairs([
//!     ("ae_lei", "5299001"),
//!     ("ae_homeMemberState", "DE"),
//!     ("ac_serviceCode_cou", "DE,NL"),
//! ])];
//!
//! let analysis = RegisterAnalyzer::new("NL").analyze(rows);
//! assert_eq!(analysis.total, 1);
//! assert_eq!(analysis.cross_border.cross_border_count, 1);
//! ```

pub mod countries;
pub mod cross_border;
pub mod dedup;
pub mod directory;
pub mod services;

#[cfg(test)]
pub mod tests;

pub use countries::{CountryBreakdown, count_home_countries, rank_countries};
pub use cross_border::{analyze_cross_border, parse_service_countries};
pub use dedup::{count_duplicates, deduplicate_records};
pub use directory::build_directory;
pub use services::{classify_segment, classify_services, tally_services};

use crate::models::{RawRecord, RegisterAnalysis};
use tracing::info;

/// Runs the aggregation pipeline for one target member state
#[derive(Debug, Clone)]
pub struct RegisterAnalyzer {
    target_country: String,
}

impl RegisterAnalyzer {
    pub fn new(target_country: impl Into<String>) -> Self {
        Self {
            target_country: target_country.into(),
        }
    }

    pub fn target_country(&self) -> &str {
        &self.target_country
    }

    /// Deduplicate the register and derive every dashboard aggregate
    pub fn analyze(&self, records: Vec<RawRecord>) -> RegisterAnalysis {
        let unique = deduplicate_records(records);
        self.analyze_unique(&unique)
    }

    /// Derive the aggregates from an already deduplicated register
    pub fn analyze_unique(&self, records: &[RawRecord]) -> RegisterAnalysis {
        let breakdown = count_home_countries(records);
        let cross_border = analyze_cross_border(records, &self.target_country);
        let services = tally_services(records);
        let directory = build_directory(records);

        let analysis = RegisterAnalysis {
            total: records.len(),
            num_countries: breakdown.distinct_countries(),
            unknown_home: breakdown.unknown,
            countries: breakdown.countries,
            cross_border,
            services,
            directory,
        };

        info!(
            "Analysis: {} unique CASPs, {} countries, {} active in {}",
            analysis.total,
            analysis.num_countries,
            analysis.cross_border.total_active(),
            self.target_country
        );

        analysis
    }
}

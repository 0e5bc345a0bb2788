//! Domestic and cross-border activity for a target member state
//!
//! A provider is cross-border into the target when its home member state is
//! elsewhere and the target appears in its service-country list. The register
//! is inconsistent about that list's delimiter: some rows use commas, some
//! pipes, some both. Parsing normalises pipes to commas first and, if that
//! yields no codes, splits on pipes directly. Both passes are kept on purpose
//! until the source settles on one delimiter.

use crate::analysis::countries::rank_countries;
use crate::models::{CrossBorderAnalysis, DomesticProvider, RawRecord};
use tracing::debug;

/// Split a service-country field into trimmed, non-empty codes
pub fn parse_service_countries(field: &str) -> Vec<String> {
    let normalised = field.replace('|', ",");
    let codes: Vec<String> = split_codes(&normalised, ',');
    if !codes.is_empty() {
        return codes;
    }
    split_codes(field, '|')
}

fn split_codes(field: &str, delimiter: char) -> Vec<String> {
    field
        .split(delimiter)
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a record lists `target` among its service countries
pub fn serves_country(record: &RawRecord, target: &str) -> bool {
    parse_service_countries(record.service_countries())
        .iter()
        .any(|code| code == target)
}

/// Whether a record passports into `target` from another home member state
pub fn is_cross_border_into(record: &RawRecord, target: &str) -> bool {
    record.home_country() != target && serves_country(record, target)
}

/// Partition the register into domestic and cross-border providers for `target`
pub fn analyze_cross_border(records: &[RawRecord], target: &str) -> CrossBorderAnalysis {
    let home: Vec<&RawRecord> = records
        .iter()
        .filter(|record| record.home_country() == target)
        .collect();

    let cross_border: Vec<&RawRecord> = records
        .iter()
        .filter(|record| is_cross_border_into(record, target))
        .collect();

    let origins = rank_countries(cross_border.iter().map(|record| record.home_country()));

    let domestic = home
        .iter()
        .map(|record| DomesticProvider {
            name: record.display_name().to_string(),
            entity: record.legal_name().to_string(),
        })
        .collect();

    debug!(
        "{}: {} domestic providers, {} cross-border from {} member states",
        target,
        home.len(),
        cross_border.len(),
        origins.len()
    );

    CrossBorderAnalysis {
        target: target.to_string(),
        home_count: home.len(),
        cross_border_count: cross_border.len(),
        origins,
        domestic,
    }
}

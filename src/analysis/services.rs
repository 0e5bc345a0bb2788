//! Classification of free-text service descriptions
//!
//! The register describes services as pipe-delimited prose such as
//! "custody and administration of crypto-assets on behalf of clients".
//! Each segment is matched against an ordered keyword table; the first rule
//! that matches names the segment's category. Order matters where keywords
//! overlap: the two exchange services differ only in "fund" versus "other".

use crate::constants::services;
use crate::models::{RawRecord, ServiceCount};
use std::collections::HashMap;
use tracing::debug;

/// A category matched when any of `any_of` occurs in the segment,
/// provided all of `all_of` occur as well
struct ServiceRule {
    label: &'static str,
    any_of: &'static [&'static str],
    all_of: &'static [&'static str],
}

const RULES: &[ServiceRule] = &[
    ServiceRule {
        label: services::CUSTODY,
        any_of: &["custody", "administration"],
        all_of: &[],
    },
    ServiceRule {
        label: services::TRADING_PLATFORM,
        any_of: &["trading platform", "operation"],
        all_of: &[],
    },
    ServiceRule {
        label: services::EXCHANGE_FIAT,
        any_of: &["exchange"],
        all_of: &["fund"],
    },
    ServiceRule {
        label: services::EXCHANGE_CRYPTO,
        any_of: &["exchange"],
        all_of: &["other"],
    },
    ServiceRule {
        label: services::EXECUTION,
        any_of: &["execution"],
        all_of: &[],
    },
    ServiceRule {
        label: services::PLACING,
        any_of: &["placing"],
        all_of: &[],
    },
    ServiceRule {
        label: services::RECEPTION,
        any_of: &["reception", "transmission"],
        all_of: &[],
    },
    ServiceRule {
        label: services::ADVICE,
        any_of: &["advice"],
        all_of: &[],
    },
    ServiceRule {
        label: services::PORTFOLIO,
        any_of: &["portfolio"],
        all_of: &[],
    },
    ServiceRule {
        label: services::TRANSFER,
        any_of: &["transfer"],
        all_of: &[],
    },
];

impl ServiceRule {
    fn matches(&self, segment: &str) -> bool {
        self.any_of.iter().any(|keyword| segment.contains(keyword))
            && self.all_of.iter().all(|keyword| segment.contains(keyword))
    }
}

/// Category of a single service segment, if any rule matches.
/// The segment is trimmed and lower-cased before matching.
pub fn classify_segment(segment: &str) -> Option<&'static str> {
    let segment = segment.trim().to_lowercase();
    if segment.is_empty() {
        return None;
    }
    RULES
        .iter()
        .find(|rule| rule.matches(&segment))
        .map(|rule| rule.label)
}

/// Distinct categories offered in a pipe-delimited service string,
/// in canonical display order
pub fn classify_services(service_codes: &str) -> Vec<&'static str> {
    let matched: Vec<&'static str> = service_codes
        .split('|')
        .filter_map(classify_segment)
        .collect();

    services::DISPLAY_ORDER
        .iter()
        .copied()
        .filter(|label| matched.contains(label))
        .collect()
}

/// Number of providers offering each category.
///
/// A provider counts once per category however many of its segments map
/// to it. Categories nobody offers are omitted; the rest follow the
/// canonical display order.
pub fn tally_services(records: &[RawRecord]) -> Vec<ServiceCount> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    let mut unclassified = 0usize;

    for record in records {
        let labels = classify_services(record.service_codes());
        if labels.is_empty() {
            unclassified += 1;
        }
        for label in labels {
            *counts.entry(label).or_default() += 1;
        }
    }

    debug!(
        "Service classification: {} categories in use, {} records without a recognised service",
        counts.len(),
        unclassified
    );

    services::DISPLAY_ORDER
        .iter()
        .filter_map(|label| {
            counts.get(label).map(|&count| ServiceCount {
                name: label.to_string(),
                count,
            })
        })
        .collect()
}

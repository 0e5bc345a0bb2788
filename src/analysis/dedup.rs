//! Register deduplication by Legal Entity Identifier
//!
//! The register lists one row per provider and service-country combination in
//! some exports, so the same entity can appear several times. Rows sharing a
//! non-empty LEI collapse to the first one encountered. Rows without an LEI
//! cannot be matched and are always kept.

use crate::models::RawRecord;
use std::collections::HashSet;
use tracing::{debug, info};

/// Keep the first record for every non-empty LEI, preserving input order
pub fn deduplicate_records(records: Vec<RawRecord>) -> Vec<RawRecord> {
    let input_count = records.len();
    let mut seen_leis: HashSet<String> = HashSet::new();
    let mut without_lei = 0usize;

    let unique: Vec<RawRecord> = records
        .into_iter()
        .filter(|record| {
            let lei = record.lei();
            if lei.is_empty() {
                without_lei += 1;
                return true;
            }
            seen_leis.insert(lei.to_string())
        })
        .collect();

    if without_lei > 0 {
        debug!("{} records have no LEI and were kept as-is", without_lei);
    }

    info!(
        "Deduplication complete: removed {} duplicate records, {} records remaining",
        input_count - unique.len(),
        unique.len()
    );

    unique
}

/// Number of records that share an LEI with an earlier record
pub fn count_duplicates(records: &[RawRecord]) -> usize {
    let mut seen_leis = HashSet::new();
    records
        .iter()
        .map(RawRecord::lei)
        .filter(|lei| !lei.is_empty() && !seen_leis.insert(*lei))
        .count()
}

//! Full provider directory

use crate::constants::authority_short_name;
use crate::models::{DirectoryEntry, RawRecord};

/// One entry per record, sorted by home country then case-insensitive name
pub fn build_directory(records: &[RawRecord]) -> Vec<DirectoryEntry> {
    let mut directory: Vec<DirectoryEntry> = records
        .iter()
        .map(|record| {
            let home = record.home_country();
            DirectoryEntry {
                name: record.display_name().to_string(),
                entity: record.legal_name().to_string(),
                home: home.to_string(),
                authority: authority_short_name(home).to_string(),
            }
        })
        .collect();

    directory.sort_by_cached_key(|entry| (entry.home.clone(), entry.name.to_lowercase()));
    directory
}

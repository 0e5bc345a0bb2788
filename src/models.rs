//! Core data structures for register processing.
//!
//! Defines the raw register record, the aggregate structures derived from
//! the deduplicated register, and run statistics.

use crate::constants::columns;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One row of the register, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Build a record from `(column, value)` pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Trimmed value of a column; missing columns read as empty
    pub fn field(&self, column: &str) -> &str {
        self.fields.get(column).map(|v| v.trim()).unwrap_or("")
    }

    pub fn lei(&self) -> &str {
        self.field(columns::LEI)
    }

    pub fn legal_name(&self) -> &str {
        self.field(columns::LEGAL_NAME)
    }

    /// Home member state, falling back to the LEI country when blank.
    /// Empty when neither column is populated.
    pub fn home_country(&self) -> &str {
        let home = self.field(columns::HOME_MEMBER_STATE);
        if home.is_empty() {
            self.field(columns::LEI_COUNTRY)
        } else {
            home
        }
    }

    /// Trading name shown in listings: first commercial name segment,
    /// or the legal name when no commercial name is registered
    pub fn display_name(&self) -> &str {
        let commercial = self.field(columns::COMMERCIAL_NAME);
        let commercial = commercial.split('|').next().unwrap_or("").trim();
        if commercial.is_empty() {
            self.legal_name()
        } else {
            commercial
        }
    }

    pub fn service_codes(&self) -> &str {
        self.field(columns::SERVICE_CODE)
    }

    pub fn service_countries(&self) -> &str {
        self.field(columns::SERVICE_COUNTRIES)
    }
}

/// Number of providers attributed to one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub count: usize,
}

/// Provider authorised in the target member state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomesticProvider {
    pub name: String,
    pub entity: String,
}

/// Domestic and passporting activity for one target member state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossBorderAnalysis {
    /// Target member state code
    pub target: String,
    /// Providers whose home member state is the target
    pub home_count: usize,
    /// Providers from other member states offering services in the target
    pub cross_border_count: usize,
    /// Cross-border providers grouped by home member state
    pub origins: Vec<CountrySummary>,
    /// Domestic providers in register order
    pub domestic: Vec<DomesticProvider>,
}

impl CrossBorderAnalysis {
    /// Providers active in the target, domestic plus cross-border
    pub fn total_active(&self) -> usize {
        self.home_count + self.cross_border_count
    }
}

/// Number of providers offering one service category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCount {
    pub name: String,
    pub count: usize,
}

/// One row of the provider directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub entity: String,
    pub home: String,
    pub authority: String,
}

/// Everything the dashboard shows, derived from the deduplicated register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAnalysis {
    /// Unique providers after deduplication
    pub total: usize,
    /// Distinct non-empty home countries
    pub num_countries: usize,
    /// Providers with no home country in either column
    pub unknown_home: usize,
    pub countries: Vec<CountrySummary>,
    pub cross_border: CrossBorderAnalysis,
    pub services: Vec<ServiceCount>,
    pub directory: Vec<DirectoryEntry>,
}

impl RegisterAnalysis {
    /// Country with the most providers
    pub fn top_country(&self) -> Option<&CountrySummary> {
        self.countries.first()
    }
}

/// Statistics for one generator run
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    pub rows_parsed: usize,
    pub unique_records: usize,
    pub duplicates_removed: usize,
    pub countries: usize,
    pub target_active: usize,
    pub output_path: PathBuf,
    pub output_bytes: usize,
    pub processing_time_ms: u128,
}

/// Integer percentage, exact halves rounded to even; any division by zero yields 0
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round_ties_even() as u32
    }
}

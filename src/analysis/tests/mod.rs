//! Test utilities and shared fixtures for register analysis tests
//!
//! This module provides record builders used across the component tests.

use crate::constants::columns;
use crate::models::RawRecord;

pub mod cross_border_tests;
pub mod directory_tests;
pub mod services_tests;

/// Builder for register rows with only the columns a test cares about
#[derive(Default)]
pub struct RecordBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lei(self, lei: &str) -> Self {
        self.with(columns::LEI, lei)
    }

    pub fn home(self, code: &str) -> Self {
        self.with(columns::HOME_MEMBER_STATE, code)
    }

    pub fn lei_country(self, code: &str) -> Self {
        self.with(columns::LEI_COUNTRY, code)
    }

    pub fn legal_name(self, name: &str) -> Self {
        self.with(columns::LEGAL_NAME, name)
    }

    pub fn commercial_name(self, name: &str) -> Self {
        self.with(columns::COMMERCIAL_NAME, name)
    }

    pub fn services(self, services: &str) -> Self {
        self.with(columns::SERVICE_CODE, services)
    }

    pub fn service_countries(self, countries: &str) -> Self {
        self.with(columns::SERVICE_COUNTRIES, countries)
    }

    fn with(mut self, column: &'static str, value: &str) -> Self {
        self.pairs.push((column, value.to_string()));
        self
    }

    pub fn build(self) -> RawRecord {
        RawRecord::from_pairs(self.pairs)
    }
}

/// Record with just an LEI and a home member state
pub fn provider(lei: &str, home: &str) -> RawRecord {
    RecordBuilder::new().lei(lei).home(home).build()
}

/// Record with a home member state and a service-country list
pub fn passporting_provider(lei: &str, home: &str, service_countries: &str) -> RawRecord {
    RecordBuilder::new()
        .lei(lei)
        .home(home)
        .service_countries(service_countries)
        .build()
}

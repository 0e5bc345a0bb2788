//! Application constants for the CASP dashboard generator
//!
//! This module contains the register source settings, CSV column names,
//! fixed lookup tables and presentation constants used throughout the
//! generator.

// =============================================================================
// Register Source
// =============================================================================

/// Location of the ESMA interim MiCAR register of CASPs
pub const ESMA_CSV_URL: &str = "https://www.esma.europa.eu/sites/default/files/2024-12/CASPS.csv";

/// The ESMA site rejects requests without a browser-like agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Network fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Output file written when no path is given
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

/// Member state analysed for domestic and cross-border activity
pub const DEFAULT_TARGET_COUNTRY: &str = "NL";

// =============================================================================
// CSV Columns
// =============================================================================

/// Column names of the ESMA CASP register export
pub mod columns {
    /// Legal Entity Identifier, the deduplication key
    pub const LEI: &str = "ae_lei";

    /// Registered legal name of the entity
    pub const LEGAL_NAME: &str = "ae_lei_name";

    /// Trading name(s), pipe-delimited when several are registered
    pub const COMMERCIAL_NAME: &str = "ae_commercial_name";

    /// Home member state of the authorisation
    pub const HOME_MEMBER_STATE: &str = "ae_homeMemberState";

    /// Country registered against the LEI, used when the home state is blank
    pub const LEI_COUNTRY: &str = "ae_lei_cou_code";

    /// Free-text crypto-asset services, pipe-delimited
    pub const SERVICE_CODE: &str = "ac_serviceCode";

    /// Member states where services are provided, comma or pipe delimited
    pub const SERVICE_COUNTRIES: &str = "ac_serviceCode_cou";
}

// =============================================================================
// Lookup Tables
// =============================================================================

/// Display names for EU/EEA country codes. Both EL and GR map to Greece
/// because the register uses either.
pub const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AT", "Austria"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("EL", "Greece"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GR", "Greece"),
    ("HR", "Croatia"),
    ("HU", "Hungary"),
    ("IE", "Ireland"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("LI", "Liechtenstein"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("MT", "Malta"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SE", "Sweden"),
    ("SI", "Slovenia"),
    ("SK", "Slovakia"),
];

/// Short names of the national competent authority per home member state
pub const AUTHORITY_SHORT_NAMES: &[(&str, &str)] = &[
    ("AT", "FMA"),
    ("BE", "NBB"),
    ("BG", "FSC"),
    ("CY", "CySEC"),
    ("CZ", "CNB"),
    ("DE", "BaFin"),
    ("DK", "DFSA"),
    ("EE", "FSA"),
    ("ES", "CNMV"),
    ("FI", "FIN-FSA"),
    ("FR", "AMF"),
    ("GR", "HCMC"),
    ("HR", "HANFA"),
    ("HU", "MNB"),
    ("IE", "CBI"),
    ("IS", "FME"),
    ("IT", "CONSOB"),
    ("LI", "FMA LI"),
    ("LT", "Bank of Lithuania"),
    ("LU", "CSSF"),
    ("LV", "FKTK"),
    ("MT", "MFSA"),
    ("NL", "AFM"),
    ("NO", "Finanstilsynet"),
    ("PL", "KNF"),
    ("PT", "CMVM"),
    ("RO", "ASF"),
    ("SE", "Finansinspektionen"),
    ("SI", "ATVP"),
    ("SK", "NBS"),
];

/// Resolve a country code to its display name, passing unknown codes through
pub fn country_name(code: &str) -> &str {
    lookup(COUNTRY_NAMES, code).unwrap_or(code)
}

/// Resolve a country code to its supervisory authority, passing unknown codes through
pub fn authority_short_name(code: &str) -> &str {
    lookup(AUTHORITY_SHORT_NAMES, code).unwrap_or(code)
}

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, value)| *value)
}

// =============================================================================
// Service Taxonomy
// =============================================================================

/// Service category labels in canonical display order
pub mod services {
    pub const CUSTODY: &str = "Custody & admin";
    pub const TRANSFER: &str = "Transfer services";
    pub const EXECUTION: &str = "Order execution";
    pub const EXCHANGE_FIAT: &str = "Exchange crypto/fiat";
    pub const EXCHANGE_CRYPTO: &str = "Exchange crypto/crypto";
    pub const RECEPTION: &str = "Reception & transmission";
    pub const PORTFOLIO: &str = "Portfolio mgmt";
    pub const PLACING: &str = "Placing";
    pub const ADVICE: &str = "Advice";
    pub const TRADING_PLATFORM: &str = "Trading platform";

    /// Display order of the service chart
    pub const DISPLAY_ORDER: &[&str] = &[
        CUSTODY,
        TRANSFER,
        EXECUTION,
        EXCHANGE_FIAT,
        EXCHANGE_CRYPTO,
        RECEPTION,
        PORTFOLIO,
        PLACING,
        ADVICE,
        TRADING_PLATFORM,
    ];
}

// =============================================================================
// Presentation
// =============================================================================

/// Donut chart geometry and palette
pub mod donut {
    /// Circumference of the donut ring (2 * PI * 82)
    pub const CIRCUMFERENCE: f64 = 515.2;

    /// Number of countries drawn as their own segment
    pub const TOP_SEGMENTS: usize = 5;

    /// One colour per top segment followed by the "Other" colour
    pub const COLORS: &[&str] = &[
        "#1A3C44", "#236E7D", "#528A97", "#6FA8B4", "#C47F3A", "#A3CDD6",
    ];
}

/// Date format used in the dashboard footer
pub const GENERATED_DATE_FORMAT: &str = "%d %B %Y";

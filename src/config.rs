//! Configuration management and validation.
//!
//! Provides the run configuration for dashboard generation: where the
//! register comes from, which member state to analyse and where the
//! dashboard is written.

use crate::constants::{
    DEFAULT_OUTPUT_FILE, DEFAULT_TARGET_COUNTRY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    ESMA_CSV_URL,
};
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration for dashboard generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Register download URL
    pub source_url: String,

    /// User-Agent header sent with the download
    pub user_agent: String,

    /// Download timeout in seconds
    pub timeout_secs: u64,

    /// Member state analysed for domestic and cross-border activity
    pub target_country: String,

    /// Local register file; skips the download when set
    pub csv_path: Option<PathBuf>,

    /// Dashboard output file
    pub output_path: PathBuf,

    /// Show spinners and the coloured summary
    pub show_progress: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_url: ESMA_CSV_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            target_country: DEFAULT_TARGET_COUNTRY.to_string(),
            csv_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            show_progress: true,
        }
    }
}

impl DashboardConfig {
    /// Read the register from a local file instead of downloading it
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    /// Set the dashboard output file
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the download URL
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Set the download timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the analysed member state; codes are upper-cased
    pub fn with_target_country(mut self, code: impl AsRef<str>) -> Self {
        self.target_country = code.as_ref().trim().to_uppercase();
        self
    }

    /// Disable spinners and the coloured summary
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Check the configuration for values that cannot produce a dashboard
    pub fn validate(&self) -> Result<()> {
        if self.csv_path.is_none() && self.source_url.trim().is_empty() {
            return Err(DashboardError::configuration(
                "source URL must not be empty when no local CSV is given",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(DashboardError::configuration(
                "download timeout must be at least one second",
            ));
        }

        let code = &self.target_country;
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DashboardError::configuration(format!(
                "target country must be a two-letter code, got '{}'",
                code
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(DashboardError::configuration("output path must not be empty"));
        }

        Ok(())
    }
}

//! Command-line interface components.

use crate::config::DashboardConfig;
use crate::constants::{
    DEFAULT_OUTPUT_FILE, DEFAULT_TARGET_COUNTRY, DEFAULT_TIMEOUT_SECS, ESMA_CSV_URL,
};
use clap::Parser;
use std::path::PathBuf;

/// Generate a self-contained HTML dashboard from the ESMA MiCAR CASP register.
#[derive(Parser, Debug, Clone)]
#[command(name = "casp_dashboard")]
#[command(about = "Generate a CASP dashboard from the ESMA MiCAR register CSV")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to a local register CSV (skips the download)
    #[arg(long = "csv", value_name = "PATH")]
    pub csv_path: Option<PathBuf>,

    /// Output HTML file path
    #[arg(short, long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_path: PathBuf,

    /// Register download URL
    #[arg(long, value_name = "URL", default_value = ESMA_CSV_URL)]
    pub url: String,

    /// Member state analysed for domestic and cross-border providers
    #[arg(
        short,
        long = "target-country",
        value_name = "CODE",
        default_value = DEFAULT_TARGET_COUNTRY
    )]
    pub target_country: String,

    /// Download timeout in seconds
    #[arg(long = "timeout", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors; no progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> DashboardConfig {
        let mut config = DashboardConfig::default()
            .with_source_url(self.url.clone())
            .with_output_path(self.output_path.clone())
            .with_target_country(&self.target_country)
            .with_timeout_secs(self.timeout_secs);

        if let Some(path) = &self.csv_path {
            config = config.with_csv_path(path.clone());
        }
        if !self.show_progress() {
            config = config.without_progress();
        }
        config
    }
}

//! Main generation pipeline.
//!
//! Orchestrates one dashboard run: register retrieval, CSV parsing,
//! aggregation, payload rendering and output. Nothing is written unless
//! every earlier stage succeeds.

use crate::analysis::{RegisterAnalyzer, count_duplicates};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::ingest::{RegisterSource, load_register};
use crate::models::{ProcessingStats, RegisterAnalysis};
use crate::render::{DashboardPayload, render_dashboard};

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::fs;
use tracing::{debug, info};

/// Generates the dashboard for one configuration
pub struct DashboardGenerator {
    config: DashboardConfig,
    analyzer: RegisterAnalyzer,
}

impl DashboardGenerator {
    /// Create a generator, rejecting invalid configurations up front
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = RegisterAnalyzer::new(config.target_country.clone());
        Ok(Self { config, analyzer })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Main processing entry point
    pub async fn generate(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        let source = RegisterSource::from_config(&self.config);

        if self.config.show_progress {
            println!("{}", "Generating CASP register dashboard".bright_green().bold());
            println!("  {} {}", "Source:".bright_cyan(), source);
            println!(
                "  {} {}",
                "Output:".bright_cyan(),
                self.config.output_path.display()
            );
        }

        // Step 1: Load and parse the register
        let spinner = self.spinner("Loading register...");
        let records = load_register(&source).await;
        spinner.finish_and_clear();
        let records = records?;

        let rows_parsed = records.len();
        let duplicates_removed = count_duplicates(&records);

        // Step 2: Aggregate
        let analysis = self.analyzer.analyze(records);

        // Step 3: Render
        let payload = DashboardPayload::from_analysis(&analysis);
        let html = render_dashboard(&payload)?;

        // Step 4: Write
        write_output(&self.config.output_path, &html).await?;
        info!("Dashboard written to {}", self.config.output_path.display());

        let stats = ProcessingStats {
            rows_parsed,
            unique_records: analysis.total,
            duplicates_removed,
            countries: analysis.num_countries,
            target_active: analysis.cross_border.total_active(),
            output_path: self.config.output_path.clone(),
            output_bytes: html.len(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        info!(
            "Processed {} rows: {} unique CASPs, {} duplicates removed in {}ms",
            stats.rows_parsed,
            stats.unique_records,
            stats.duplicates_removed,
            stats.processing_time_ms
        );

        if self.config.show_progress {
            self.print_summary(&stats, &analysis);
        }

        Ok(stats)
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    fn print_summary(&self, stats: &ProcessingStats, analysis: &RegisterAnalysis) {
        println!("\n{}", "Generation Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Rows parsed:".bright_cyan(),
            stats.rows_parsed.to_string().bright_white()
        );
        if stats.duplicates_removed > 0 {
            println!(
                "  {} {}",
                "Duplicates removed:".bright_yellow(),
                stats.duplicates_removed.to_string().bright_yellow()
            );
        }
        println!(
            "  {} {}",
            "Unique CASPs:".bright_cyan(),
            stats.unique_records.to_string().bright_white().bold()
        );
        println!(
            "  {} {}",
            "Member states:".bright_cyan(),
            stats.countries.to_string().bright_white()
        );
        println!(
            "  {} {} ({} domestic + {} cross-border)",
            format!("Active in {}:", analysis.cross_border.target).bright_cyan(),
            stats.target_active.to_string().bright_white().bold(),
            analysis.cross_border.home_count,
            analysis.cross_border.cross_border_count
        );
        println!(
            "  {} {}",
            "Dashboard:".bright_cyan(),
            stats.output_path.display()
        );
    }
}

/// Write the dashboard, creating missing parent directories
async fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, html).await?;
    debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

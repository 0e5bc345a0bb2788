//! CASP Dashboard Library
//!
//! Turns the ESMA interim MiCAR register of crypto-asset service providers
//! into a self-contained HTML dashboard.
//!
//! This library provides tools for:
//! - Downloading the register CSV or reading a local copy
//! - Deduplicating providers by Legal Entity Identifier
//! - Counting providers per home member state
//! - Detecting providers passporting into a target member state
//! - Classifying free-text services into ten categories
//! - Rendering a static dashboard with an embedded data payload

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod processor;
pub mod render;

// Re-export commonly used types
pub use analysis::RegisterAnalyzer;
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use models::{ProcessingStats, RawRecord, RegisterAnalysis};
pub use processor::DashboardGenerator;

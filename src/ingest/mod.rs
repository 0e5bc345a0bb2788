//! Register ingestion
//!
//! Loads the register text from disk or from ESMA, decodes it and parses
//! the CSV into [`RawRecord`]s:
//! - [`source`] - local file versus download selection
//! - [`fetch`] - HTTP GET with a browser user agent and a fixed timeout
//! - [`decode`] - UTF-8 with byte order mark, Latin-1 fallback for downloads
//! - [`parser`] - CSV rows keyed by column name

pub mod decode;
pub mod fetch;
pub mod parser;
pub mod source;

pub use parser::parse_register;
pub use source::RegisterSource;

use crate::error::Result;
use crate::models::RawRecord;
use tracing::info;

/// Load and parse the register from `source`
pub async fn load_register(source: &RegisterSource) -> Result<Vec<RawRecord>> {
    let text = source.load().await?;
    let records = parse_register(&text)?;
    info!("Parsed {} rows", records.len());
    Ok(records)
}

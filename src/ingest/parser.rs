//! CSV parsing into register records

use crate::error::Result;
use crate::models::RawRecord;
use csv::StringRecord;
use tracing::debug;

/// Parse register CSV text into one record per data row.
///
/// The first row names the columns. Rows shorter than the header simply
/// lack the trailing columns; extra cells beyond the header are ignored.
pub fn parse_register(text: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    debug!("Register columns: {}", headers.len());

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while reader.read_record(&mut row)? {
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(RawRecord::new(fields));
    }

    debug!("Parsed {} register rows", records.len());
    Ok(records)
}

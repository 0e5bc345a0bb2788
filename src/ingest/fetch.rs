//! Register download over HTTP

use crate::error::{DashboardError, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Download the register, failing on transport errors, timeouts and
/// non-success status codes. No retries.
pub async fn fetch_register(url: &str, user_agent: &str, timeout: Duration) -> Result<Vec<u8>> {
    info!("Downloading register from {}", url);

    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DashboardError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    debug!("Downloaded {} bytes", bytes.len());

    Ok(bytes.to_vec())
}

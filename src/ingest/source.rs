//! Where the register comes from: a local file or the ESMA download

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::ingest::decode::{decode_download, decode_utf8};
use crate::ingest::fetch::fetch_register;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;
use tracing::info;

/// Register input selected for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterSource {
    /// CSV already on disk; skips the download
    LocalFile(PathBuf),
    /// CSV fetched over HTTP
    Remote {
        url: String,
        user_agent: String,
        timeout: Duration,
    },
}

impl RegisterSource {
    /// Local file when the configuration names one, otherwise the download
    pub fn from_config(config: &DashboardConfig) -> Self {
        match &config.csv_path {
            Some(path) => Self::LocalFile(path.clone()),
            None => Self::Remote {
                url: config.source_url.clone(),
                user_agent: config.user_agent.clone(),
                timeout: Duration::from_secs(config.timeout_secs),
            },
        }
    }

    /// Read the register as text
    pub async fn load(&self) -> Result<String> {
        match self {
            Self::LocalFile(path) => {
                info!("Reading local CSV: {}", path.display());
                if !path.exists() {
                    return Err(DashboardError::SourceNotFound { path: path.clone() });
                }
                let bytes = fs::read(path).await?;
                decode_utf8(&bytes).map_err(|e| DashboardError::Decode {
                    path: path.clone(),
                    reason: e.to_string(),
                })
            }
            Self::Remote {
                url,
                user_agent,
                timeout,
            } => {
                let bytes = fetch_register(url, user_agent, *timeout).await?;
                let text = decode_download(&bytes);
                info!("Downloaded {} characters", text.chars().count());
                Ok(text)
            }
        }
    }
}

impl fmt::Display for RegisterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalFile(path) => write!(f, "{}", path.display()),
            Self::Remote { url, .. } => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_config_prefers_local_file() {
        let config = DashboardConfig::default().with_csv_path("register.csv");
        assert_eq!(
            RegisterSource::from_config(&config),
            RegisterSource::LocalFile(PathBuf::from("register.csv"))
        );
    }

    #[test]
    fn test_from_config_defaults_to_download() {
        let config = DashboardConfig::default().with_timeout_secs(5);
        match RegisterSource::from_config(&config) {
            RegisterSource::Remote { url, timeout, .. } => {
                assert_eq!(url, crate::constants::ESMA_CSV_URL);
                assert_eq!(timeout, Duration::from_secs(5));
            }
            other => panic!("expected remote source, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_local_file_strips_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CASPS.csv");
        std::fs::write(&path, b"\xEF\xBB\xBFae_lei\nA\n").unwrap();

        let text = RegisterSource::LocalFile(path).load().await.unwrap();

        assert_eq!(text, "ae_lei\nA\n");
    }

    #[tokio::test]
    async fn test_load_missing_local_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");

        let result = RegisterSource::LocalFile(path).load().await;

        assert!(matches!(result, Err(DashboardError::SourceNotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_local_file_rejects_latin1() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.csv");
        std::fs::write(&path, b"ae_lei_name\nZ\xFCrich AG\n").unwrap();

        let result = RegisterSource::LocalFile(path).load().await;

        assert!(matches!(result, Err(DashboardError::Decode { .. })));
    }
}

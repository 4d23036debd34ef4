//! Report configuration loaded from a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SalescopeError};

/// Sender address used when the configuration provides none.
pub const DEFAULT_SENDER: &str = "debug@example.com";

/// SMTP endpoint for report delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Mail server host.
    #[serde(default = "default_smtp_host")]
    pub host: String,
    /// Mail server port.
    #[serde(default = "default_smtp_port")]
    pub port: u16,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

/// Configuration for report generation and delivery.
///
/// When `recipient` is absent, email delivery is skipped entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Email delivery target.
    #[serde(default)]
    pub recipient: Option<String>,
    /// Email "from" address.
    #[serde(default)]
    pub sender: Option<String>,
    /// Root directory for report artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Mail server endpoint.
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recipient: None,
            sender: None,
            output_dir: default_output_dir(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            SalescopeError::Config(format!("failed to open '{}': {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            SalescopeError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })
    }

    /// The sender address to use, falling back to [`DEFAULT_SENDER`].
    pub fn sender_or_default(&self) -> &str {
        self.sender.as_deref().unwrap_or(DEFAULT_SENDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert!(config.recipient.is_none());
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.smtp.host, "localhost");
        assert_eq!(config.smtp.port, 1025);
        assert_eq!(config.sender_or_default(), DEFAULT_SENDER);
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"recipient": "sales@example.com", "sender": "reports@example.com",
                "output_dir": "out", "smtp": {{"host": "mail.example.com", "port": 2525}}}}"#
        )
        .unwrap();

        let config = ReportConfig::load(file.path()).unwrap();
        assert_eq!(config.recipient.as_deref(), Some("sales@example.com"));
        assert_eq!(config.sender_or_default(), "reports@example.com");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.smtp.port, 2525);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"recipient": "sales@example.com"}}"#).unwrap();

        let config = ReportConfig::load(file.path()).unwrap();
        assert_eq!(config.recipient.as_deref(), Some("sales@example.com"));
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.smtp.host, "localhost");
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = ReportConfig::load("no/such/config.json").unwrap_err();
        assert!(matches!(err, SalescopeError::Config(_)));
    }

    #[test]
    fn test_load_malformed_json_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ReportConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SalescopeError::Config(_)));
    }
}

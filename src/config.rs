//! Run configuration
//!
//! Settings that are not part of the command line contract: where the API
//! lives, where exports go and how requests are made. Values come from an
//! optional YAML file, overridden by environment variables and CLI flags.
//!
//! ```yaml
//! base_url: https://api.hipchat.com/
//! output_dir: ./exports
//! page_size: 1000
//! timeout_secs: 30
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::output::validate_output_dir;
use crate::types::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.hipchat.com/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Export Config
// ============================================================================

/// Complete export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// API root that `v2/user/{user}/history` is resolved against
    pub base_url: String,

    /// Directory receiving one JSON file per user
    pub output_dir: PathBuf,

    /// Records requested per page
    pub page_size: u32,

    /// Request timeout in seconds (0 disables the timeout)
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("history-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Values that replace file or default settings when present
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `base_url`
    pub base_url: Option<String>,
    /// Replaces `output_dir`
    pub output_dir: Option<PathBuf>,
    /// Replaces `page_size`
    pub page_size: Option<u32>,
    /// Replaces `timeout_secs`
    pub timeout_secs: Option<u64>,
}

impl ExportConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))
            .map_err(|e| Error::config(e.to_string()))?;
        Self::from_yaml_str(&content)
    }

    /// Load from an optional file, then apply overrides
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    /// Apply overrides on top of this config
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Check every setting and resolve the output directory.
    ///
    /// Performs no network activity. On success the output directory is an
    /// absolute, canonical path.
    pub fn validate(mut self) -> Result<Self> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }

        self.output_dir = validate_output_dir(&self.output_dir)?;
        Ok(self)
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .user_agent(&self.user_agent);
        match self.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder.no_timeout(),
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.base_url, "https://api.hipchat.com/");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.page_size, 1000);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = ExportConfig::from_yaml_str(
            r"
base_url: https://chat.internal.example.com/
page_size: 250
",
        )
        .unwrap();

        assert_eq!(config.base_url, "https://chat.internal.example.com/");
        assert_eq!(config.page_size, 250);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let err = ExportConfig::from_yaml_str("page_sise: 10").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_from_missing_file() {
        let err = ExportConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_applies_overrides_over_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.yaml");
        fs::write(&path, "page_size: 10\ntimeout_secs: 5\n").unwrap();

        let config = ExportConfig::load(
            Some(&path),
            ConfigOverrides {
                page_size: Some(20),
                output_dir: Some(PathBuf::from("/srv/exports")),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.page_size, 20);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.output_dir, PathBuf::from("/srv/exports"));
    }

    #[test]
    fn test_zero_timeout_disables_timeout() {
        let config = ExportConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.timeout().is_none());
        assert!(config.http_config().timeout.is_none());
    }

    #[test]
    fn test_validate_resolves_output_dir() {
        let dir = tempdir().unwrap();
        let config = ExportConfig::new()
            .with_output_dir(dir.path())
            .validate()
            .unwrap();

        assert!(config.output_dir.is_absolute());
        assert_eq!(config.output_dir, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_validate_rejects_missing_output_dir() {
        let dir = tempdir().unwrap();
        let err = ExportConfig::new()
            .with_output_dir(dir.path().join("missing"))
            .validate()
            .unwrap_err();

        assert!(matches!(err, Error::OutputDir { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_url_and_page_size() {
        let dir = tempdir().unwrap();

        let err = ExportConfig::new()
            .with_output_dir(dir.path())
            .with_base_url("not a url")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ExportConfig::new()
            .with_output_dir(dir.path())
            .with_base_url("ftp://example.com/")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = ExportConfig::new()
            .with_output_dir(dir.path())
            .with_page_size(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_http_config() {
        let config = ExportConfig::new().with_base_url("http://localhost:9999/");
        let http = config.http_config();
        assert_eq!(http.base_url.as_deref(), Some("http://localhost:9999/"));
        assert_eq!(http.timeout, Some(Duration::from_secs(30)));
        assert!(http.user_agent.starts_with("history-export/"));
    }
}

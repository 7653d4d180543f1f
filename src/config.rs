//! Configuration management for CollabDesk
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{CollabError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Backend URL substituted when none is configured
pub const PLACEHOLDER_BACKEND_URL: &str = "http://placeholder.invalid";

/// Anonymous key substituted when none is configured
pub const PLACEHOLDER_ANON_KEY: &str = "placeholder-anon-key";

/// Main configuration structure for CollabDesk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Query cache staleness and retry policy
    #[serde(default)]
    pub query: QueryConfig,
    /// Logging output settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// View-layer defaults
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote backend configuration
///
/// The project URL and anonymous access key are the only two values the
/// client needs to talk to the backend. Neither is required at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend project URL (e.g. `https://api.example.com`)
    #[serde(default)]
    pub url: Option<String>,

    /// Anonymous access key sent with every request
    #[serde(default)]
    pub anon_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl BackendConfig {
    /// Configured URL, or the inert placeholder
    pub fn url_or_placeholder(&self) -> &str {
        self.url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(PLACEHOLDER_BACKEND_URL)
    }

    /// Configured anonymous key, or the inert placeholder
    pub fn anon_key_or_placeholder(&self) -> &str {
        self.anon_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(PLACEHOLDER_ANON_KEY)
    }

    /// Returns `true` when either value fell back to its placeholder
    ///
    /// # Examples
    ///
    /// ```
    /// use collabdesk::config::BackendConfig;
    ///
    /// assert!(BackendConfig::default().is_placeholder());
    /// ```
    pub fn is_placeholder(&self) -> bool {
        self.url_or_placeholder() == PLACEHOLDER_BACKEND_URL
            || self.anon_key_or_placeholder() == PLACEHOLDER_ANON_KEY
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn fill_placeholders(&mut self) {
        if self.url.as_deref().map_or(true, |u| u.trim().is_empty()) {
            tracing::warn!(
                "Backend URL is not configured; using placeholder {}",
                PLACEHOLDER_BACKEND_URL
            );
            self.url = Some(PLACEHOLDER_BACKEND_URL.to_string());
        }
        if self
            .anon_key
            .as_deref()
            .map_or(true, |k| k.trim().is_empty())
        {
            tracing::warn!("Backend anonymous key is not configured; using placeholder");
            self.anon_key = Some(PLACEHOLDER_ANON_KEY.to_string());
        }
    }
}

/// Query cache configuration
///
/// Defaults mirror the behaviour the view layer was built against: data is
/// fresh for five minutes and retained for ten, reads retry three times and
/// writes once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Seconds a cached result is considered fresh
    #[serde(default = "default_stale_time")]
    pub stale_time_seconds: u64,

    /// Seconds an unused cached result is retained
    #[serde(default = "default_gc_time")]
    pub gc_time_seconds: u64,

    /// Retries for failed reads
    #[serde(default = "default_query_retries")]
    pub query_retries: u32,

    /// Retries for failed writes
    #[serde(default = "default_mutation_retries")]
    pub mutation_retries: u32,

    /// Base delay of the exponential retry backoff (milliseconds)
    #[serde(default = "default_retry_base_delay")]
    pub retry_base_delay_ms: u64,

    /// Upper bound of the retry backoff (milliseconds)
    #[serde(default = "default_retry_max_delay")]
    pub retry_max_delay_ms: u64,
}

fn default_stale_time() -> u64 {
    300
}

fn default_gc_time() -> u64 {
    600
}

fn default_query_retries() -> u32 {
    3
}

fn default_mutation_retries() -> u32 {
    1
}

fn default_retry_base_delay() -> u64 {
    1_000
}

fn default_retry_max_delay() -> u64 {
    30_000
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time_seconds: default_stale_time(),
            gc_time_seconds: default_gc_time(),
            query_retries: default_query_retries(),
            mutation_retries: default_mutation_retries(),
            retry_base_delay_ms: default_retry_base_delay(),
            retry_max_delay_ms: default_retry_max_delay(),
        }
    }
}

impl QueryConfig {
    /// Freshness window
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_seconds)
    }

    /// Retention window for unused entries
    pub fn gc_time(&self) -> Duration {
        Duration::from_secs(self.gc_time_seconds)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json_format: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

/// View-layer defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Items per page for paginated lists
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    20
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed. A
    /// missing file, backend URL or anonymous key is never an error.
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);
        config.backend.fill_placeholders();

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CollabError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| CollabError::Config(format!("Failed to parse config: {}", e)))
    }

    fn apply_env_vars(&mut self) {
        if let Ok(url) = std::env::var("COLLABDESK_BACKEND_URL") {
            self.backend.url = Some(url);
        }

        if let Ok(key) = std::env::var("COLLABDESK_ANON_KEY") {
            self.backend.anon_key = Some(key);
        }

        if let Ok(timeout) = std::env::var("COLLABDESK_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.backend.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid COLLABDESK_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(stale) = std::env::var("COLLABDESK_STALE_TIME_SECONDS") {
            if let Ok(value) = stale.parse() {
                self.query.stale_time_seconds = value;
            } else {
                tracing::warn!("Invalid COLLABDESK_STALE_TIME_SECONDS: {}", stale);
            }
        }

        if let Ok(gc) = std::env::var("COLLABDESK_GC_TIME_SECONDS") {
            if let Ok(value) = gc.parse() {
                self.query.gc_time_seconds = value;
            } else {
                tracing::warn!("Invalid COLLABDESK_GC_TIME_SECONDS: {}", gc);
            }
        }

        if let Ok(level) = std::env::var("COLLABDESK_LOG_LEVEL") {
            tracing::debug!(level = %level, "Env override: COLLABDESK_LOG_LEVEL");
            self.logging.level = level;
        }

        if let Ok(json_logs) = std::env::var("COLLABDESK_JSON_LOGS") {
            match json_logs.parse::<bool>() {
                Ok(v) => self.logging.json_format = v,
                Err(_) => {
                    tracing::warn!("Invalid value for COLLABDESK_JSON_LOGS: {}", json_logs);
                }
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            self.logging.level = "debug".to_string();
        }
        if cli.json_logs {
            self.logging.json_format = true;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `CollabError::Config` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.backend.timeout_seconds == 0 {
            return Err(CollabError::Config(
                "backend.timeout_seconds must be greater than 0".to_string(),
            ));
        }

        let url = self.backend.url_or_placeholder();
        let parsed = url::Url::parse(url)
            .map_err(|e| CollabError::Config(format!("Invalid backend URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CollabError::Config(format!(
                "Backend URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.query.stale_time_seconds == 0 {
            return Err(CollabError::Config(
                "query.stale_time_seconds must be greater than 0".to_string(),
            ));
        }

        if self.query.gc_time_seconds < self.query.stale_time_seconds {
            return Err(CollabError::Config(
                "query.gc_time_seconds must not be shorter than query.stale_time_seconds"
                    .to_string(),
            ));
        }

        if self.query.retry_base_delay_ms > self.query.retry_max_delay_ms {
            return Err(CollabError::Config(
                "query.retry_base_delay_ms must not exceed query.retry_max_delay_ms".to_string(),
            ));
        }

        if self.ui.page_size == 0 || self.ui.page_size > 100 {
            return Err(CollabError::Config(
                "ui.page_size must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "COLLABDESK_BACKEND_URL",
            "COLLABDESK_ANON_KEY",
            "COLLABDESK_TIMEOUT_SECONDS",
            "COLLABDESK_STALE_TIME_SECONDS",
            "COLLABDESK_GC_TIME_SECONDS",
            "COLLABDESK_LOG_LEVEL",
            "COLLABDESK_JSON_LOGS",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.query.stale_time_seconds, 300);
        assert_eq!(config.query.gc_time_seconds, 600);
        assert_eq!(config.query.query_retries, 3);
        assert_eq!(config.query.mutation_retries, 1);
        assert_eq!(config.ui.page_size, 20);
        assert!(config.backend.is_placeholder());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = Config::default();
        config.backend.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_gc_shorter_than_stale() {
        let mut config = Config::default();
        config.query.gc_time_seconds = 10;
        config.query.stale_time_seconds = 60;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_url() {
        let mut config = Config::default();
        config.backend.url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        config.backend.url = Some("ftp://example.com".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_page_size_bounds() {
        let mut config = Config::default();
        config.ui.page_size = 0;
        assert!(config.validate().is_err());
        config.ui.page_size = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
backend:
  url: https://api.example.com
  anon_key: anon-123
  timeout_seconds: 10
query:
  stale_time_seconds: 60
  gc_time_seconds: 120
logging:
  json_format: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.url_or_placeholder(), "https://api.example.com");
        assert_eq!(config.backend.anon_key_or_placeholder(), "anon-123");
        assert_eq!(config.backend.timeout_seconds, 10);
        assert_eq!(config.query.stale_time_seconds, 60);
        assert_eq!(config.query.query_retries, 3);
        assert!(config.logging.json_format);
        assert!(!config.backend.is_placeholder());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_nonexistent_file_uses_placeholders() {
        clear_env();
        let cli = crate::cli::Cli::default();
        let config = Config::load("/nonexistent/config.yaml", &cli).unwrap();
        assert_eq!(config.backend.url.as_deref(), Some(PLACEHOLDER_BACKEND_URL));
        assert_eq!(config.backend.anon_key.as_deref(), Some(PLACEHOLDER_ANON_KEY));
        assert!(config.backend.is_placeholder());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("COLLABDESK_BACKEND_URL", "https://env.example.com");
        std::env::set_var("COLLABDESK_ANON_KEY", "env-key");
        std::env::set_var("COLLABDESK_STALE_TIME_SECONDS", "42");
        std::env::set_var("COLLABDESK_GC_TIME_SECONDS", "not-a-number");

        let cli = crate::cli::Cli::default();
        let config = Config::load("/nonexistent/config.yaml", &cli).unwrap();
        clear_env();

        assert_eq!(config.backend.url_or_placeholder(), "https://env.example.com");
        assert_eq!(config.backend.anon_key_or_placeholder(), "env-key");
        assert_eq!(config.query.stale_time_seconds, 42);
        assert_eq!(config.query.gc_time_seconds, 600);
        assert!(!config.backend.is_placeholder());
    }

    #[test]
    #[serial]
    fn test_cli_verbose_raises_log_level() {
        clear_env();
        let cli = crate::cli::Cli {
            verbose: true,
            json_logs: true,
            ..Default::default()
        };
        let config = Config::load("/nonexistent/config.yaml", &cli).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
    }
}

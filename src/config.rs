//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `SITE_BASE_URL` - Public origin used for canonical URLs, the sitemap and
//!   JSON-LD (default: `https://www.gulfcoastbuilders.com`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting (default: `true`)
//! - `STRICT_AUDIT` - Refuse to start when the content audit finds issues
//!   (default: `false`)

use crate::utils::BaseUrl;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://www.gulfcoastbuilders.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: PathBuf,
    pub rate_limit_enabled: bool,
    /// When true, startup fails if the content audit reports any issue.
    pub strict_audit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: PathBuf::from("static"),
            rate_limit_enabled: true,
            strict_audit: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url: env::var("SITE_BASE_URL").unwrap_or(defaults.base_url),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            rate_limit_enabled: env_flag("RATE_LIMIT_ENABLED").unwrap_or(defaults.rate_limit_enabled),
            strict_audit: env_flag("STRICT_AUDIT").unwrap_or(defaults.strict_audit),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an http(s) origin
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.site_base_url()?;

        Ok(())
    }

    /// Parsed `SITE_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, not http(s), or has a path.
    pub fn site_base_url(&self) -> Result<BaseUrl> {
        BaseUrl::parse(&self.base_url)
            .with_context(|| format!("SITE_BASE_URL is invalid: '{}'", self.base_url))
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Site base URL: {}", self.base_url);
        tracing::info!("  Static dir: {}", self.static_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limiting: {}",
            if self.rate_limit_enabled { "enabled" } else { "disabled" }
        );
        tracing::info!("  Strict audit: {}", self.strict_audit);
    }
}

/// Reads a boolean flag; `true`/`1`/`yes` and `false`/`0`/`no`, case-insensitive.
/// Unset or unrecognized values yield `None`.
fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => {
            tracing::warn!(%name, %value, "Ignoring unrecognized boolean value");
            None
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "SITE_BASE_URL",
        "LOG_FORMAT",
        "STATIC_DIR",
        "RATE_LIMIT_ENABLED",
        "STRICT_AUDIT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://example.com/blog".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.rate_limit_enabled);
        assert!(!config.strict_audit);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SITE_BASE_URL", "http://localhost:3000");
            env::set_var("STATIC_DIR", "/srv/site/static");
            env::set_var("RATE_LIMIT_ENABLED", "false");
            env::set_var("STRICT_AUDIT", "1");
        }

        let config = Config::from_env();

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/site/static"));
        assert!(!config.rate_limit_enabled);
        assert!(config.strict_audit);
        assert_eq!(
            config.site_base_url().unwrap().as_str(),
            "http://localhost:3000"
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unrecognized_flag_falls_back_to_default() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("RATE_LIMIT_ENABLED", "sometimes");
        }

        assert!(Config::from_env().rate_limit_enabled);

        clear_env();
    }
}

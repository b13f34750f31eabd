//! Configuration management for Locksmith.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. Collaborator handles (vault session,
//! breach service) are constructed explicitly from this struct by the
//! caller; there are no process-wide singletons.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Audit pipeline configuration.
///
/// Loaded from `~/.config/locksmith/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Maximum number of breach checks concurrently in flight
    pub max_concurrent_checks: usize,
    /// Base URL of the breach range-lookup service
    pub breach_api_url: String,
    /// Name of the external vault tool binary
    pub vault_program: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_concurrent_checks: 5,
            breach_api_url: "https://api.pwnedpasswords.com".to_string(),
            vault_program: "bw".to_string(),
            timeout_secs: 30,
        }
    }
}

impl AuditConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `LOCKSMITH_MAX_CONCURRENT`: Override the breach-check concurrency cap
    /// - `LOCKSMITH_BREACH_API_URL`: Override the breach service base URL
    /// - `LOCKSMITH_VAULT_PROGRAM`: Override the vault tool binary name
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        if let Ok(val) = std::env::var("LOCKSMITH_MAX_CONCURRENT") {
            if let Ok(limit) = val.parse() {
                config.max_concurrent_checks = limit;
                tracing::debug!("Override max_concurrent_checks from env: {}", limit);
            }
        }

        if let Ok(val) = std::env::var("LOCKSMITH_BREACH_API_URL") {
            tracing::debug!("Override breach_api_url from env: {}", val);
            config.breach_api_url = val;
        }

        if let Ok(val) = std::env::var("LOCKSMITH_VAULT_PROGRAM") {
            tracing::debug!("Override vault_program from env: {}", val);
            config.vault_program = val;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_concurrent_checks == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_checks".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.breach_api_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "breach_api_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/locksmith/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("dev", "locksmith", "locksmith").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.max_concurrent_checks, 5);
        assert_eq!(config.breach_api_url, "https://api.pwnedpasswords.com");
        assert_eq!(config.vault_program, "bw");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AuditConfig =
            toml::from_str("max_concurrent_checks = 8").expect("parse partial TOML");
        assert_eq!(config.max_concurrent_checks, 8);
        assert_eq!(config.vault_program, "bw");
    }

    #[test]
    fn test_env_overrides_applied_then_validated() {
        // Single test so the var mutations cannot race a parallel test.
        std::env::set_var("LOCKSMITH_MAX_CONCURRENT", "9");
        std::env::set_var("LOCKSMITH_BREACH_API_URL", "http://localhost:8080");
        std::env::set_var("LOCKSMITH_VAULT_PROGRAM", "bw-stub");

        let config = AuditConfig::load_with_env().expect("overridden config is valid");
        assert_eq!(config.max_concurrent_checks, 9);
        assert_eq!(config.breach_api_url, "http://localhost:8080");
        assert_eq!(config.vault_program, "bw-stub");

        // An override that breaks validation must error, not pass through.
        std::env::set_var("LOCKSMITH_MAX_CONCURRENT", "0");
        let result = AuditConfig::load_with_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        // A non-numeric value is ignored and the default survives.
        std::env::set_var("LOCKSMITH_MAX_CONCURRENT", "not-a-number");
        let config = AuditConfig::load_with_env().expect("bad override is ignored");
        assert_eq!(config.max_concurrent_checks, 5);
        assert_eq!(config.breach_api_url, "http://localhost:8080");

        std::env::remove_var("LOCKSMITH_MAX_CONCURRENT");
        std::env::remove_var("LOCKSMITH_BREACH_API_URL");
        std::env::remove_var("LOCKSMITH_VAULT_PROGRAM");
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let config = AuditConfig {
            max_concurrent_checks: 0,
            ..AuditConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_api_url() {
        let config = AuditConfig {
            breach_api_url: String::new(),
            ..AuditConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

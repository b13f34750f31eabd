//! Locksmith Core - Foundation crate for the Locksmith vault auditor.
//!
//! This crate provides the shared types, error handling, and configuration
//! management that all other Locksmith crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared audit types (`Credential`, `HttpsUsage`, `BreachResult`)
//!
//! # Example
//!
//! ```rust
//! use locksmith_core::{AuditConfig, HttpsUsage};
//!
//! let config = AuditConfig::default();
//! assert_eq!(config.max_concurrent_checks, 5);
//!
//! let usage = HttpsUsage::classify(["https://a.com", "http://b.com"]);
//! assert_eq!(usage, HttpsUsage::Partial);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::AuditConfig;
pub use error::{ConfigError, ConfigResult, LocksmithError, Result};
pub use types::{BreachResult, Credential, HttpsUsage};

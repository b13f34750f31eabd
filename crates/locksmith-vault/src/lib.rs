//! Locksmith Vault - External vault tool integration.
//!
//! This crate wraps the Bitwarden CLI (`bw`) as a read-only source of raw
//! vault records. It owns the serde shapes of the tool's JSON output and the
//! vault-specific error taxonomy; it performs no enrichment itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use locksmith_vault::{BitwardenCli, VaultSource};
//!
//! let vault = BitwardenCli::new("bw", session_token);
//! let items = vault.list_all().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[allow(missing_docs)]
pub mod error;
pub mod models;

mod bitwarden;

// Re-export commonly used types
pub use bitwarden::{BitwardenCli, VaultSource};
pub use error::{Result, VaultError};
pub use models::{Login, LoginUri, VaultItem};

//! Locksmith Audit - Credential enrichment pipeline.
//!
//! This crate contains the core audit algorithm: it fetches raw vault
//! records, narrows them by query and site, computes vault-wide password
//! reuse, and enriches each record concurrently with a k-anonymity breach
//! check and an HTTPS classification.
//!
//! # Features
//!
//! - Concurrent breach checks with a strict, configurable in-flight cap
//! - Reuse counts computed over the full vault regardless of filtering
//! - Deterministic output order (original record position)
//! - Fail-fast error policy: the first vault or lookup error aborts the run
//!
//! # Example
//!
//! ```rust,ignore
//! use locksmith_audit::AuditPipeline;
//! use locksmith_breach::BreachChecker;
//! use locksmith_vault::BitwardenCli;
//! use std::sync::Arc;
//!
//! let vault = Arc::new(BitwardenCli::new("bw", session));
//! let checker = Arc::new(BreachChecker::new()?);
//!
//! let pipeline = AuditPipeline::new(vault, checker).with_max_in_flight(5);
//! let credentials = pipeline.credentials(None, None).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod bounded;
#[allow(missing_docs)]
pub mod error;
pub mod pipeline;
pub mod reuse;

// Re-export commonly used types
pub use bounded::try_for_each_bounded;
pub use error::{AuditError, Result};
pub use pipeline::{AuditPipeline, PasswordChecker, ProgressFn};
pub use reuse::ReuseTable;

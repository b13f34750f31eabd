//! Locksmith Breach - k-anonymity breach corpus lookups.
//!
//! This crate checks plaintext passwords against a remote breach corpus
//! using the range-query (k-anonymity) protocol: only a 5-character SHA-1
//! digest prefix is sent over the wire, the returned suffix list is matched
//! locally, and the password itself never leaves the process.
//!
//! # Example
//!
//! ```rust,ignore
//! use locksmith_breach::BreachChecker;
//!
//! let checker = BreachChecker::new()?;
//! let result = checker.check("hunter2").await?;
//! if result.is_pwned {
//!     println!("compromised, seen {} times", result.risk_score);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod checker;
#[allow(missing_docs)]
pub mod error;
pub mod range;

// Re-export commonly used types
pub use checker::BreachChecker;
pub use error::{BreachError, Result};
pub use range::match_suffix;

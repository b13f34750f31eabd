//! Shared types used across the Locksmith auditor.
//!
//! This module defines the audit result types handed from the enrichment
//! pipeline to the report writers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How thoroughly a credential's login URIs use HTTPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpsUsage {
    /// Every login URI uses HTTPS.
    Full,
    /// At least one login URI uses HTTPS, but not all of them.
    Partial,
    /// No login URI uses HTTPS.
    None,
}

impl HttpsUsage {
    /// Classify a set of login URIs.
    ///
    /// `Full` if every URI starts with `https` (vacuously true for a login
    /// without URIs), `Partial` if at least one does, `None` otherwise.
    pub fn classify<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut any = false;
        let mut all = true;

        for uri in uris {
            if uri.as_ref().starts_with("https") {
                any = true;
            } else {
                all = false;
            }
        }

        if all {
            HttpsUsage::Full
        } else if any {
            HttpsUsage::Partial
        } else {
            HttpsUsage::None
        }
    }
}

impl fmt::Display for HttpsUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpsUsage::Full => write!(f, "full"),
            HttpsUsage::Partial => write!(f, "partial"),
            HttpsUsage::None => write!(f, "none"),
        }
    }
}

/// Outcome of a single breach-corpus lookup.
///
/// Transient, recomputed on every run; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachResult {
    /// Whether the password appears in the breach corpus.
    pub is_pwned: bool,
    /// Occurrence count reported by the corpus (0 if absent).
    pub risk_score: u32,
}

impl BreachResult {
    /// A result for a password absent from the corpus.
    #[must_use]
    pub fn clean() -> Self {
        Self {
            is_pwned: false,
            risk_score: 0,
        }
    }
}

/// A vault credential enriched with audit findings.
///
/// One is produced per qualifying vault record and consumed by the report
/// writers. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Vault record identifier.
    pub id: String,
    /// Display name of the record.
    pub title: String,
    /// Login username.
    pub username: String,
    /// Login password (plaintext, as stored in the vault).
    pub password: String,
    /// Whether the password appears in the breach corpus.
    pub is_pwned: bool,
    /// Occurrence count of this password across the *full* vault.
    ///
    /// Always computed against the unfiltered record set, so query/site
    /// filtering never hides the true reuse signal.
    pub reuse_count: u32,
    /// HTTPS classification of the record's login URIs.
    pub https_usage: HttpsUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_all_https() {
        let usage = HttpsUsage::classify(["https://a.com", "https://b.com"]);
        assert_eq!(usage, HttpsUsage::Full);
    }

    #[test]
    fn test_classify_mixed() {
        let usage = HttpsUsage::classify(["https://a.com", "http://b.com"]);
        assert_eq!(usage, HttpsUsage::Partial);
    }

    #[test]
    fn test_classify_no_https() {
        let usage = HttpsUsage::classify(["http://a.com"]);
        assert_eq!(usage, HttpsUsage::None);
    }

    #[test]
    fn test_classify_empty_uri_list_is_full() {
        // "every URI uses HTTPS" holds vacuously, so a login without URIs
        // is never reported as insecure.
        let usage = HttpsUsage::classify(Vec::<&str>::new());
        assert_eq!(usage, HttpsUsage::Full);
    }

    #[test]
    fn test_https_usage_serde() {
        let json = serde_json::to_string(&HttpsUsage::Partial).expect("serialize");
        assert_eq!(json, "\"partial\"");
    }

    #[test]
    fn test_credential_round_trip() {
        let cred = Credential {
            id: "b1d7c2f0".to_string(),
            title: "Example".to_string(),
            username: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            is_pwned: true,
            reuse_count: 3,
            https_usage: HttpsUsage::Full,
        };

        let json = serde_json::to_string(&cred).expect("serialize");
        let back: Credential = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.id, cred.id);
        assert_eq!(back.reuse_count, 3);
        assert_eq!(back.https_usage, HttpsUsage::Full);
    }
}

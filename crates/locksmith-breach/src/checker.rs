//! k-anonymity breach lookups against a range-query service.

use crate::error::{BreachError, Result};
use crate::range::match_suffix;
use locksmith_core::BreachResult;
use reqwest::Client;
use sha1::{Digest, Sha1};
use std::time::Duration;

/// Length of the digest prefix sent to the range service.
const PREFIX_LEN: usize = 5;

/// Checks passwords against a breach corpus without revealing them.
///
/// Only the first five hex characters of the password's SHA-1 digest ever
/// leave the process; the returned suffix list is matched locally. One
/// request per check, no retry.
pub struct BreachChecker {
    client: Client,
    base_url: String,
}

impl BreachChecker {
    /// Create a checker against the public Pwned Passwords service.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_url("https://api.pwnedpasswords.com", Duration::from_secs(30))
    }

    /// Create a checker against a custom range service.
    ///
    /// Used by tests to point at a local stub server.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BreachError::Request)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Check a single password against the corpus.
    ///
    /// # Errors
    /// Returns error on network failure or a non-success HTTP status. The
    /// caller owns the abort-or-skip decision.
    pub async fn check(&self, password: &str) -> Result<BreachResult> {
        let digest = hex::encode(Sha1::digest(password.as_bytes()));
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);

        // Hard invariant: the request carries the 5-char prefix and nothing else.
        let url = format!("{}/range/{prefix}", self.base_url);
        tracing::debug!(%prefix, "range lookup");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let result = match_suffix(&body, suffix);

        if result.is_pwned {
            tracing::debug!(risk_score = result.risk_score, "password is compromised");
        } else {
            tracing::debug!("password not found in corpus");
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_prefix_split() {
        // SHA-1("password") = 5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8
        let digest = hex::encode(Sha1::digest(b"password"));
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);
        assert_eq!(prefix, "5baa6");
        assert_eq!(suffix, "1e4c9b93f3f0682250b6cf8331b7ee68fd8");
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = hex::encode(Sha1::digest(b"Tr0ub4dor&3"));
        assert_eq!(digest.len(), 40);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let checker =
            BreachChecker::with_url("http://localhost:9999/", Duration::from_secs(1)).unwrap();
        assert_eq!(checker.base_url, "http://localhost:9999");
    }
}

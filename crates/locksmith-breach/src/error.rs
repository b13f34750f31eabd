use thiserror::Error;

/// Errors from a breach-corpus range lookup.
///
/// Lookups are best-effort single attempts: there is no retry here, and the
/// caller decides whether a failure aborts the batch.
#[derive(Debug, Error)]
pub enum BreachError {
    /// The HTTP request itself failed (DNS, connect, timeout, body read).
    #[error("range request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("range service returned HTTP {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, BreachError>;

impl From<BreachError> for locksmith_core::LocksmithError {
    fn from(err: BreachError) -> Self {
        locksmith_core::LocksmithError::Breach(err.to_string())
    }
}

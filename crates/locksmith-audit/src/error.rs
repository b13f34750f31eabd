use locksmith_breach::BreachError;
use locksmith_vault::VaultError;
use thiserror::Error;

/// Errors from an enrichment run.
///
/// Both variants are fatal to the current run: a vault failure means no
/// record can be trusted, and a breach-check failure aborts the batch
/// (fail-fast, no partially enriched list is ever returned).
#[derive(Debug, Error)]
pub enum AuditError {
    /// The external vault tool failed or produced unparsable output.
    #[error("vault error: {0}")]
    Vault(#[from] VaultError),

    /// A breach lookup failed.
    #[error("breach check failed: {0}")]
    Breach(#[from] BreachError),
}

pub type Result<T> = std::result::Result<T, AuditError>;

impl From<AuditError> for locksmith_core::LocksmithError {
    fn from(err: AuditError) -> Self {
        match err {
            AuditError::Vault(e) => e.into(),
            AuditError::Breach(e) => e.into(),
        }
    }
}

//! Bitwarden CLI vault source.
//!
//! Wraps the `bw` command-line tool in list mode. The session token is
//! assumed to have been acquired already (`bw unlock`); the auditor never
//! writes to the vault.

use crate::error::{Result, VaultError};
use crate::models::VaultItem;
use async_trait::async_trait;
use tokio::process::Command;

/// Supplier of raw vault records.
///
/// The enrichment pipeline depends on this seam rather than on the concrete
/// CLI wrapper, so tests can substitute an in-memory source.
#[async_trait]
pub trait VaultSource: Send + Sync {
    /// Fetch every record in the vault.
    async fn list_all(&self) -> Result<Vec<VaultItem>>;

    /// Fetch records narrowed by the tool's own search.
    async fn list_filtered(&self, query: &str) -> Result<Vec<VaultItem>>;
}

/// `VaultSource` backed by the Bitwarden CLI.
pub struct BitwardenCli {
    program: String,
    session: String,
}

impl BitwardenCli {
    /// Create a wrapper around the given binary with a pre-acquired session.
    pub fn new(program: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            session: session.into(),
        }
    }

    /// Run `<program> list items --session <token> [extra args]` and parse
    /// stdout as a JSON array of items.
    async fn list_items(&self, extra_args: &[&str]) -> Result<Vec<VaultItem>> {
        let mut args = vec!["list", "items", "--session", self.session.as_str()];
        args.extend_from_slice(extra_args);

        tracing::debug!(program = %self.program, ?extra_args, "invoking vault tool");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|source| VaultError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(VaultError::CommandFailed {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        let items: Vec<VaultItem> = serde_json::from_slice(&output.stdout)?;
        tracing::debug!("vault tool returned {} items", items.len());
        Ok(items)
    }
}

#[async_trait]
impl VaultSource for BitwardenCli {
    async fn list_all(&self) -> Result<Vec<VaultItem>> {
        self.list_items(&[]).await
    }

    async fn list_filtered(&self, query: &str) -> Result<Vec<VaultItem>> {
        self.list_items(&["--search", query]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let cli = BitwardenCli::new("locksmith-test-no-such-binary", "token");
        let err = cli.list_all().await.expect_err("binary does not exist");
        assert!(matches!(err, VaultError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_nonzero_exit_carries_code_and_stderr() {
        // `false` exits 1 with no output on every Unix.
        let cli = BitwardenCli::new("false", "token");
        match cli.list_all().await {
            Err(VaultError::CommandFailed { code, .. }) => assert_eq!(code, 1),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparsable_stdout_is_parse_error() {
        // `true` exits 0 with empty stdout, which is not a JSON array.
        let cli = BitwardenCli::new("true", "token");
        let err = cli.list_all().await.expect_err("empty stdout");
        assert!(matches!(err, VaultError::Parse(_)));
    }
}

use thiserror::Error;

/// Errors from invoking the external vault tool.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The vault tool could not be spawned (missing binary, permissions).
    #[error("failed to spawn vault tool '{program}': {source}")]
    Spawn {
        /// Binary name that failed to launch
        program: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The vault tool ran but exited with a non-zero status.
    #[error("vault tool exited with code {code}: {stderr}")]
    CommandFailed {
        /// Process exit code (-1 if terminated by signal)
        code: i32,
        /// Captured stderr text
        stderr: String,
    },

    /// The vault tool's stdout was not valid JSON of the expected shape.
    #[error("failed to parse vault tool output: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VaultError>;

impl From<VaultError> for locksmith_core::LocksmithError {
    fn from(err: VaultError) -> Self {
        locksmith_core::LocksmithError::Vault(err.to_string())
    }
}

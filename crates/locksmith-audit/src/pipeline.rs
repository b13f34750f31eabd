//! Credential enrichment pipeline.
//!
//! Fetches raw vault records, narrows them by query and site, computes
//! vault-wide reuse counts, and enriches each remaining record with a
//! concurrent breach check and an HTTPS classification.

use crate::bounded::try_for_each_bounded;
use crate::error::{AuditError, Result};
use crate::reuse::ReuseTable;
use async_trait::async_trait;
use locksmith_breach::BreachChecker;
use locksmith_core::{BreachResult, Credential, HttpsUsage};
use locksmith_vault::{VaultItem, VaultSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

/// Default bound on concurrently outstanding breach checks.
const DEFAULT_MAX_IN_FLIGHT: usize = 5;

/// Observer invoked once per enriched record with (completed, total).
pub type ProgressFn = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Breach lookup seam used by the pipeline.
///
/// [`BreachChecker`] is the production implementation; tests substitute an
/// in-memory corpus.
#[async_trait]
pub trait PasswordChecker: Send + Sync {
    /// Check one password against the breach corpus.
    async fn check(&self, password: &str) -> locksmith_breach::Result<BreachResult>;
}

#[async_trait]
impl PasswordChecker for BreachChecker {
    async fn check(&self, password: &str) -> locksmith_breach::Result<BreachResult> {
        BreachChecker::check(self, password).await
    }
}

/// Orchestrates the enrichment of vault records into audit credentials.
///
/// Collaborators are injected at construction; the pipeline holds no global
/// state and every call owns its own intermediate tables.
pub struct AuditPipeline {
    vault: Arc<dyn VaultSource>,
    checker: Arc<dyn PasswordChecker>,
    max_in_flight: usize,
    progress: Option<ProgressFn>,
}

impl AuditPipeline {
    /// Create a pipeline over the given vault source and breach checker.
    pub fn new(vault: Arc<dyn VaultSource>, checker: Arc<dyn PasswordChecker>) -> Self {
        Self {
            vault,
            checker,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            progress: None,
        }
    }

    /// Set the bound on concurrently outstanding breach checks.
    #[must_use]
    pub fn with_max_in_flight(mut self, max: usize) -> Self {
        self.max_in_flight = max.max(1);
        self
    }

    /// Register a per-item completion observer (progress indicator).
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Produce enriched credentials, optionally narrowed by a search query
    /// and/or an exact site hostname.
    ///
    /// Reuse counts always reflect the complete unfiltered vault, never the
    /// narrowed subset. Output is sorted by original record position, so
    /// results are deterministic despite concurrent checks.
    ///
    /// # Errors
    /// Fails fast: a vault failure or the first breach-check failure aborts
    /// the whole call with no partial results.
    pub async fn credentials(
        &self,
        query: Option<&str>,
        site: Option<&str>,
    ) -> Result<Vec<Credential>> {
        let all: Vec<VaultItem> = self
            .vault
            .list_all()
            .await?
            .into_iter()
            .filter(VaultItem::qualifies)
            .collect();

        let mut items = match query {
            Some(q) => self
                .vault
                .list_filtered(q)
                .await?
                .into_iter()
                .filter(VaultItem::qualifies)
                .collect(),
            None => all.clone(),
        };

        if let Some(host) = site {
            items.retain(|item| item.uris().any(|uri| uri_matches_host(uri, host)));
        }

        if items.is_empty() {
            tracing::debug!("no records matched, skipping breach checks");
            return Ok(Vec::new());
        }

        let reuse = ReuseTable::analyze(&all);
        let total = items.len();
        tracing::debug!("enriching {} of {} records", total, all.len());

        let collected: Mutex<Vec<(usize, Credential)>> = Mutex::new(Vec::with_capacity(total));
        let done = AtomicUsize::new(0);

        try_for_each_bounded(
            items.into_iter().enumerate(),
            self.max_in_flight,
            |(position, item)| {
                let reuse = &reuse;
                let collected = &collected;
                let done = &done;

                async move {
                    // Qualifying filter guarantees a non-empty password.
                    let password = item.password().unwrap_or_default().to_string();

                    let breach = self.checker.check(&password).await?;
                    let reuse_count = reuse.count_for(&password);
                    let https_usage = HttpsUsage::classify(item.uris());

                    let username = item.username().to_string();
                    let credential = Credential {
                        id: item.id,
                        title: item.name,
                        username,
                        password,
                        is_pwned: breach.is_pwned,
                        reuse_count,
                        https_usage,
                    };

                    collected
                        .lock()
                        .expect("collector mutex poisoned")
                        .push((position, credential));

                    let completed = done.fetch_add(1, Ordering::SeqCst) + 1;
                    if let Some(hook) = &self.progress {
                        hook(completed, total);
                    }

                    Ok::<(), AuditError>(())
                }
            },
        )
        .await?;

        let mut indexed = collected.into_inner().expect("collector mutex poisoned");
        indexed.sort_by_key(|(position, _)| *position);

        Ok(indexed.into_iter().map(|(_, cred)| cred).collect())
    }
}

/// Whether a login URI's parsed hostname equals `host` exactly.
///
/// A URI that fails to parse, or parses without a hostname, never matches
/// and never errors.
fn uri_matches_host(uri: &str, host: &str) -> bool {
    match Url::parse(uri) {
        Ok(url) => url.host_str() == Some(host),
        Err(_) => false,
    }
}

//! Password reuse analysis.
//!
//! Always computed from the complete unfiltered record set, so a reuse count
//! on a query-filtered record reflects global reuse across the vault.

use locksmith_vault::VaultItem;
use std::collections::HashMap;

/// Mapping from password to its occurrence count across the full vault.
///
/// Contains only passwords occurring more than once, ordered descending by
/// count (ties keep first-seen order). Read-only during enrichment.
#[derive(Debug, Clone, Default)]
pub struct ReuseTable {
    entries: Vec<(String, u32)>,
}

impl ReuseTable {
    /// Build the table from the full record set.
    ///
    /// Single pass over qualifying records with a hash-map accumulator;
    /// groups of size 1 are dropped.
    #[must_use]
    pub fn analyze(items: &[VaultItem]) -> Self {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for item in items {
            let Some(password) = item.password() else {
                continue;
            };
            if password.is_empty() {
                continue;
            }

            let count = counts.entry(password).or_insert(0);
            if *count == 0 {
                first_seen.push(password);
            }
            *count += 1;
        }

        let mut entries: Vec<(String, u32)> = first_seen
            .into_iter()
            .filter_map(|password| {
                let count = counts[password];
                (count > 1).then(|| (password.to_string(), count))
            })
            .collect();

        // Stable: ties keep first-seen order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Self { entries }
    }

    /// Occurrence count for a password, 0 if it is not reused.
    #[must_use]
    pub fn count_for(&self, password: &str) -> u32 {
        self.entries
            .iter()
            .find(|(p, _)| p == password)
            .map_or(0, |(_, count)| *count)
    }

    /// Entries as (password, count), descending by count.
    #[must_use]
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }
}

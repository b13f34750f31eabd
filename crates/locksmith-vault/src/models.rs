//! Serde shapes for the vault tool's JSON output.
//!
//! Mirrors the subset of the Bitwarden CLI item format the auditor consumes;
//! every other field in the tool's output is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw record as emitted by `bw list items`.
///
/// Immutable once fetched. Only records with a non-empty login password
/// participate in enrichment (see [`VaultItem::qualifies`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultItem {
    /// Vault record identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login payload; absent for notes, cards and identities.
    #[serde(default)]
    pub login: Option<Login>,
    /// Last revision timestamp.
    #[serde(default)]
    pub revision_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
}

/// Login payload of a vault record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    /// Login username; the CLI emits `null` for records without one.
    #[serde(default)]
    pub username: Option<String>,
    /// Login password; the CLI emits `null` for records without one.
    #[serde(default)]
    pub password: Option<String>,
    /// Associated site URIs.
    #[serde(default)]
    pub uris: Vec<LoginUri>,
}

/// A site URI attached to a login, with its match rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUri {
    /// The URI text. Not guaranteed to parse as a URL.
    pub uri: String,
    /// Bitwarden URI match rule; unused by the auditor.
    #[serde(default, rename = "match")]
    pub match_rule: Option<i32>,
}

impl VaultItem {
    /// Whether this record participates in enrichment.
    ///
    /// True iff the record has a login with a non-empty password.
    #[must_use]
    pub fn qualifies(&self) -> bool {
        self.password().is_some_and(|p| !p.is_empty())
    }

    /// The login password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.login.as_ref()?.password.as_deref()
    }

    /// The login username, or an empty string if absent.
    #[must_use]
    pub fn username(&self) -> &str {
        self.login
            .as_ref()
            .and_then(|l| l.username.as_deref())
            .unwrap_or("")
    }

    /// The login URI strings, in vault order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.login
            .iter()
            .flat_map(|l| l.uris.iter())
            .map(|u| u.uri.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "object": "item",
        "id": "3f2a9c1e-8b44-4d02-9f6a-0c5d8e7b1a23",
        "organizationId": null,
        "type": 1,
        "name": "Example Site",
        "notes": null,
        "favorite": false,
        "login": {
            "fido2Credentials": [],
            "uris": [{ "match": null, "uri": "https://example.com/login" }],
            "username": "alice",
            "password": "hunter2",
            "totp": null
        },
        "revisionDate": "2024-11-02T10:15:30.000Z",
        "creationDate": "2023-05-14T08:00:00.000Z"
    }"#;

    #[test]
    fn test_parse_cli_item() {
        let item: VaultItem = serde_json::from_str(SAMPLE).expect("parse bw item");
        assert_eq!(item.id, "3f2a9c1e-8b44-4d02-9f6a-0c5d8e7b1a23");
        assert_eq!(item.name, "Example Site");
        assert_eq!(item.username(), "alice");
        assert_eq!(item.password(), Some("hunter2"));
        assert_eq!(
            item.uris().collect::<Vec<_>>(),
            vec!["https://example.com/login"]
        );
        assert!(item.qualifies());
    }

    #[test]
    fn test_item_without_login_does_not_qualify() {
        let json = r#"{ "id": "a", "name": "Secure Note" }"#;
        let item: VaultItem = serde_json::from_str(json).expect("parse note item");
        assert!(!item.qualifies());
        assert_eq!(item.username(), "");
        assert_eq!(item.uris().count(), 0);
    }

    #[test]
    fn test_null_password_does_not_qualify() {
        let json = r#"{
            "id": "b",
            "name": "No Password",
            "login": { "username": "bob", "password": null, "uris": [] }
        }"#;
        let item: VaultItem = serde_json::from_str(json).expect("parse item");
        assert!(!item.qualifies());
    }

    #[test]
    fn test_empty_password_does_not_qualify() {
        let json = r#"{
            "id": "c",
            "name": "Empty Password",
            "login": { "username": "carol", "password": "", "uris": [] }
        }"#;
        let item: VaultItem = serde_json::from_str(json).expect("parse item");
        assert!(!item.qualifies());
    }
}

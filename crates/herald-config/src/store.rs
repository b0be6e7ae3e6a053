//! Document store (Firestore) configuration.

use serde::{Deserialize, Serialize};

use crate::credentials::ServiceAccount;
use crate::error::ConfigError;

fn default_collection() -> String {
    "announcements".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

const fn default_page_size() -> u32 {
    300
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Base64-encoded service account JSON.
    #[serde(default)]
    pub credentials_base64: String,

    /// Project id override. Empty means "use the service account's project".
    #[serde(default)]
    pub project_id: String,

    /// Collection holding announcement documents.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Firestore REST root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Documents requested per list page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request HTTP timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            credentials_base64: String::new(),
            project_id: String::new(),
            collection: default_collection(),
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Check if a credential blob has been supplied.
    pub fn is_configured(&self) -> bool {
        !self.credentials_base64.trim().is_empty()
    }

    /// Decode the service account from the credential blob.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the blob is empty and
    /// [`ConfigError::InvalidValue`] when it is not base64-encoded service
    /// account JSON.
    pub fn service_account(&self) -> Result<ServiceAccount, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                field: "store.credentials_base64 (FIREBASE_SERVICE_ACCOUNT_BASE64)".into(),
            });
        }
        ServiceAccount::from_base64(&self.credentials_base64)
    }

    /// Effective project id: the override, else the service account's.
    pub fn project_id<'a>(&'a self, account: &'a ServiceAccount) -> &'a str {
        if self.project_id.is_empty() {
            &account.project_id
        } else {
            &self.project_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = StoreConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.collection, "announcements");
        assert_eq!(config.page_size, 300);
        let err = config.service_account().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { .. }));
    }

    #[test]
    fn whitespace_blob_is_not_configured() {
        let config = StoreConfig {
            credentials_base64: "  \n".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}

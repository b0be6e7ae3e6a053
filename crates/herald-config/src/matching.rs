//! Matching policy configuration.

use herald_core::{AnnouncementField, MatchPolicy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_exact_field() -> AnnouncementField {
    AnnouncementField::Title
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    /// Selection policy: `first`, `scored` or `exact`.
    #[serde(default)]
    pub policy: MatchPolicy,

    /// Fields concatenated into each record's searchable text.
    #[serde(default = "AnnouncementField::default_search_fields")]
    pub fields: Vec<AnnouncementField>,

    /// Field compared for equality under the `exact` policy.
    #[serde(default = "default_exact_field")]
    pub exact_field: AnnouncementField,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::default(),
            fields: AnnouncementField::default_search_fields(),
            exact_field: default_exact_field(),
        }
    }
}

impl MatchingConfig {
    /// Reject combinations that could never match anything.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a substring policy is
    /// configured with no searchable fields, or the exact policy names a field
    /// other than `topic`, `title` or `type`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.policy {
            MatchPolicy::First | MatchPolicy::Scored if self.fields.is_empty() => {
                Err(ConfigError::InvalidValue {
                    field: "matching.fields".into(),
                    reason: format!("policy '{}' needs at least one field", self.policy),
                })
            }
            MatchPolicy::Exact
                if !matches!(
                    self.exact_field,
                    AnnouncementField::Topic | AnnouncementField::Title | AnnouncementField::Type
                ) =>
            {
                Err(ConfigError::InvalidValue {
                    field: "matching.exact_field".into(),
                    reason: format!("'{}' cannot be used for exact lookups", self.exact_field),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = MatchingConfig::default();
        assert_eq!(config.policy, MatchPolicy::Scored);
        assert_eq!(
            config.fields,
            vec![AnnouncementField::Type, AnnouncementField::Title]
        );
        assert_eq!(config.exact_field, AnnouncementField::Title);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_fields_rejected_for_substring_policies() {
        let config = MatchingConfig {
            fields: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let exact = MatchingConfig {
            policy: MatchPolicy::Exact,
            fields: Vec::new(),
            ..Default::default()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn exact_lookup_on_description_rejected() {
        let config = MatchingConfig {
            policy: MatchPolicy::Exact,
            exact_field: AnnouncementField::Description,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("matching.exact_field"));
    }
}

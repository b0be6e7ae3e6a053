//! Matching policy and store field enums.
//!
//! Both enums use `snake_case` serialization so they read naturally in TOML
//! and environment variables (`HERALD_MATCHING__POLICY=scored`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// MatchPolicy
// ---------------------------------------------------------------------------

/// How a query selects an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// First record in scan order containing any keyword.
    First,
    /// Record containing the most distinct keywords; earliest wins ties.
    #[default]
    Scored,
    /// Store-side equality on a single field against the keyword phrase.
    Exact,
}

impl MatchPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Scored => "scored",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "scored" => Ok(Self::Scored),
            "exact" => Ok(Self::Exact),
            other => Err(CoreError::UnknownVariant {
                kind: "match policy",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// AnnouncementField
// ---------------------------------------------------------------------------

/// A text field of an announcement record that can take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementField {
    #[serde(alias = "kind")]
    Type,
    Title,
    Topic,
    #[serde(alias = "authorName", alias = "author")]
    AuthorName,
    Description,
}

impl AnnouncementField {
    /// Field name as stored in the document collection.
    #[must_use]
    pub const fn store_name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Title => "title",
            Self::Topic => "topic",
            Self::AuthorName => "authorName",
            Self::Description => "description",
        }
    }

    /// Default set of fields folded into the searchable text.
    #[must_use]
    pub fn default_search_fields() -> Vec<Self> {
        vec![Self::Type, Self::Title]
    }
}

impl fmt::Display for AnnouncementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.store_name())
    }
}

impl FromStr for AnnouncementField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "type" | "kind" => Ok(Self::Type),
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "authorName" | "author_name" | "author" => Ok(Self::AuthorName),
            "description" => Ok(Self::Description),
            other => Err(CoreError::UnknownVariant {
                kind: "announcement field",
                value: other.to_string(),
            }),
        }
    }
}

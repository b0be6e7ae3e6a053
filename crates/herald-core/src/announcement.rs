//! The announcement record as stored in the document collection.
//!
//! Records are owned by the store and only ever read here. Every text field
//! defaults to an empty string (absent and `null` alike) so matching code never
//! has to reason about missing values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::AnnouncementField;

/// A single posted announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Store document id. Not part of the stored body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Short category label (`type` in the store).
    #[serde(default, rename = "type", deserialize_with = "nullable::string")]
    pub kind: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub title: String,

    /// Topic label used by exact-field lookups.
    #[serde(default, deserialize_with = "nullable::string")]
    pub topic: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub author_name: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub description: String,

    /// Creation instant, stored as epoch milliseconds.
    #[serde(default, with = "epoch_millis")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Image resource URI.
    #[serde(
        default,
        rename = "fileURL",
        deserialize_with = "nullable::string"
    )]
    pub file_url: String,
}

impl Announcement {
    /// Borrow the text value of a store field.
    #[must_use]
    pub fn field(&self, field: AnnouncementField) -> &str {
        match field {
            AnnouncementField::Type => &self.kind,
            AnnouncementField::Title => &self.title,
            AnnouncementField::Topic => &self.topic,
            AnnouncementField::AuthorName => &self.author_name,
            AnnouncementField::Description => &self.description,
        }
    }
}

mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Epoch-millisecond (de)serialization for optional timestamps.
///
/// Accepts integers, floats, numeric strings and RFC 3339 strings on input so
/// records written by different clients all land in the same shape.
pub mod epoch_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_i64(ts.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<Raw>::deserialize(deserializer)? else {
            return Ok(None);
        };
        match raw {
            Raw::Int(ms) => from_millis(ms).map(Some).ok_or_else(|| {
                D::Error::custom(format!("timestamp out of range: {ms}"))
            }),
            #[allow(clippy::cast_possible_truncation)]
            Raw::Float(ms) => from_millis(ms as i64)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
            Raw::Text(text) => parse_text(&text).map_err(D::Error::custom),
        }
    }

    /// Convert epoch milliseconds into a UTC instant.
    #[must_use]
    pub fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(ms)
    }

    /// Parse a textual timestamp: empty, numeric milliseconds, or RFC 3339.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when the text is neither numeric
    /// nor a valid RFC 3339 instant.
    pub fn parse_text(text: &str) -> Result<Option<DateTime<Utc>>, String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if let Ok(ms) = text.parse::<i64>() {
            return from_millis(ms)
                .map(Some)
                .ok_or_else(|| format!("timestamp out of range: {ms}"));
        }
        DateTime::parse_from_rfc3339(text)
            .map(|ts| Some(ts.with_timezone(&Utc)))
            .map_err(|e| format!("invalid timestamp '{text}': {e}"))
    }
}

//! Firestore document decoding.
//!
//! Firestore wraps every field in a typed envelope (`{"stringValue": "..."}`,
//! `{"integerValue": "42"}`, ...). Records are validated here, at the read
//! boundary: text fields accept any scalar and default to empty, the
//! timestamp accepts epoch milliseconds or a native timestamp and defaults to
//! absent. Nothing downstream sees the envelope.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use herald_core::Announcement;
use herald_core::announcement::epoch_millis;
use serde::Deserialize;
use serde_json::Value;

/// A document as returned by list and query endpoints.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// Full resource name; the last segment is the document id.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl Document {
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    fn text(&self, key: &str) -> String {
        self.fields.get(key).map(scalar_text).unwrap_or_default()
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        let value = self.fields.get("timestamp")?;
        let parsed = decode_timestamp(value);
        if parsed.is_none() && !is_null(value) {
            tracing::warn!(document = self.id(), %value, "unreadable announcement timestamp");
        }
        parsed
    }

    /// Convert into the record shape.
    #[must_use]
    pub fn into_announcement(self) -> Announcement {
        Announcement {
            id: self.id().to_string(),
            kind: self.text("type"),
            title: self.text("title"),
            topic: self.text("topic"),
            author_name: self.text("authorName"),
            description: self.text("description"),
            timestamp: self.timestamp(),
            file_url: self.text("fileURL"),
        }
    }
}

fn is_null(value: &Value) -> bool {
    value.get("nullValue").is_some()
}

/// Text rendering of a scalar envelope. Maps, arrays and nulls become empty.
fn scalar_text(value: &Value) -> String {
    if let Some(text) = value.get("stringValue").and_then(Value::as_str) {
        return text.to_string();
    }
    if let Some(text) = value.get("integerValue").and_then(Value::as_str) {
        return text.to_string();
    }
    if let Some(number) = value.get("doubleValue").and_then(Value::as_f64) {
        return number.to_string();
    }
    if let Some(flag) = value.get("booleanValue").and_then(Value::as_bool) {
        return flag.to_string();
    }
    if let Some(text) = value.get("timestampValue").and_then(Value::as_str) {
        return text.to_string();
    }
    String::new()
}

#[allow(clippy::cast_possible_truncation)]
fn decode_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    if let Some(text) = value.get("integerValue").and_then(Value::as_str) {
        return text.parse::<i64>().ok().and_then(epoch_millis::from_millis);
    }
    if let Some(ms) = value.get("doubleValue").and_then(Value::as_f64) {
        return epoch_millis::from_millis(ms as i64);
    }
    value
        .get("timestampValue")
        .or_else(|| value.get("stringValue"))
        .and_then(Value::as_str)
        .and_then(|text| epoch_millis::parse_text(text).ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn document(fields: &str) -> Document {
        serde_json::from_str(&format!(
            r#"{{"name": "projects/p/databases/(default)/documents/announcements/doc42",
                 "fields": {fields},
                 "createTime": "2024-03-05T14:30:00.000000Z"}}"#
        ))
        .unwrap()
    }

    fn march_fifth() -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap())
    }

    #[test]
    fn decodes_full_document() {
        let record = document(
            r#"{
                "type": {"stringValue": "Event"},
                "title": {"stringValue": "AI Workshop"},
                "authorName": {"stringValue": "Dr. Rao"},
                "description": {"stringValue": "Hands-on"},
                "timestamp": {"integerValue": "1709649000000"},
                "fileURL": {"stringValue": "https://cdn.example.com/p.png"}
            }"#,
        )
        .into_announcement();

        assert_eq!(record.id, "doc42");
        assert_eq!(record.kind, "Event");
        assert_eq!(record.title, "AI Workshop");
        assert_eq!(record.author_name, "Dr. Rao");
        assert_eq!(record.file_url, "https://cdn.example.com/p.png");
        assert_eq!(record.timestamp, march_fifth());
    }

    #[test]
    fn missing_and_null_fields_default() {
        let record = document(r#"{"title": {"nullValue": null}}"#).into_announcement();
        assert_eq!(record.title, "");
        assert_eq!(record.description, "");
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn native_and_string_timestamps_decode() {
        let native = document(r#"{"timestamp": {"timestampValue": "2024-03-05T14:30:00Z"}}"#);
        let text = document(r#"{"timestamp": {"stringValue": "1709649000000"}}"#);
        let double = document(r#"{"timestamp": {"doubleValue": 1709649000000.0}}"#);
        assert_eq!(native.into_announcement().timestamp, march_fifth());
        assert_eq!(text.into_announcement().timestamp, march_fifth());
        assert_eq!(double.into_announcement().timestamp, march_fifth());
    }

    #[test]
    fn unreadable_timestamp_is_absent() {
        let record = document(r#"{"timestamp": {"stringValue": "last tuesday"}}"#).into_announcement();
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn non_string_scalars_render_as_text() {
        let record = document(r#"{"title": {"integerValue": "2024"}, "type": {"mapValue": {}}}"#)
            .into_announcement();
        assert_eq!(record.title, "2024");
        assert_eq!(record.kind, "");
    }
}

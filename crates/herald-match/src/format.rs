//! Fulfillment text for a matched announcement.

use chrono::{DateTime, Utc};
use herald_core::Announcement;

const TIMESTAMP_FORMAT: &str = "%-d %B %Y, %H:%M UTC";
const UNKNOWN_DATE: &str = "unknown date";

/// Render a matched announcement with the fixed chat template.
#[must_use]
pub fn format_announcement(record: &Announcement) -> String {
    format!(
        "📢 *{title}* by {author}\n\n{description}\n\n📅 Date: {date}\n\n🔗 [View Image]({url})",
        title = record.title,
        author = record.author_name,
        description = record.description,
        date = render_timestamp(record.timestamp),
        url = record.file_url,
    )
}

/// Human-readable UTC rendering, e.g. `5 March 2024, 14:30 UTC`.
#[must_use]
pub fn render_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || UNKNOWN_DATE.to_string(),
        |ts| ts.format(TIMESTAMP_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn workshop() -> Announcement {
        Announcement {
            kind: "Event".into(),
            title: "AI Workshop".into(),
            author_name: "Dr. Rao".into(),
            description: "Hands-on session in Lab 3.".into(),
            timestamp: Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()),
            file_url: "https://cdn.example.com/poster.png".into(),
            ..Default::default()
        }
    }

    #[test]
    fn renders_fixed_template() {
        assert_eq!(
            format_announcement(&workshop()),
            "📢 *AI Workshop* by Dr. Rao\n\n\
             Hands-on session in Lab 3.\n\n\
             📅 Date: 5 March 2024, 14:30 UTC\n\n\
             🔗 [View Image](https://cdn.example.com/poster.png)"
        );
    }

    #[test]
    fn output_carries_every_field() {
        let record = workshop();
        let text = format_announcement(&record);
        for part in [
            record.title.as_str(),
            record.author_name.as_str(),
            record.description.as_str(),
            record.file_url.as_str(),
            "5 March 2024",
        ] {
            assert!(text.contains(part), "missing {part:?} in {text:?}");
        }
        assert_eq!(text, format_announcement(&record));
    }

    #[test]
    fn missing_timestamp_renders_placeholder() {
        let record = Announcement {
            title: "Notice".into(),
            ..Default::default()
        };
        assert!(format_announcement(&record).contains("📅 Date: unknown date"));
    }
}

//! Prompt builders.

use herald_core::Announcement;

/// Prompt for answering a query nothing in the store matched.
#[must_use]
pub fn answer_prompt(query: &str, word_limit: u32) -> String {
    format!(
        "Answer the following query in under {word_limit} words, clear and concise:\n\"{}\"",
        query.trim()
    )
}

/// Prompt asking the model to present a matched announcement as a chat message.
///
/// `date` is the already-rendered timestamp so the model repeats it verbatim
/// instead of reformatting epoch values.
#[must_use]
pub fn rephrase_prompt(record: &Announcement, date: &str, word_limit: u32) -> String {
    format!(
        "Write a friendly chat message of under {word_limit} words announcing the following. \
         Mention the title, the author and the date, and end with the image link.\n\
         Type: {kind}\n\
         Title: {title}\n\
         Author: {author}\n\
         Date: {date}\n\
         Description: {description}\n\
         Image: {url}",
        kind = record.kind,
        title = record.title,
        author = record.author_name,
        description = record.description,
        url = record.file_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn answer_prompt_bounds_words_and_quotes_query() {
        assert_eq!(
            answer_prompt("  what time is it ", 100),
            "Answer the following query in under 100 words, clear and concise:\n\"what time is it\""
        );
    }

    #[test]
    fn rephrase_prompt_carries_record_fields() {
        let record = Announcement {
            kind: "Event".into(),
            title: "AI Workshop".into(),
            author_name: "Dr. Rao".into(),
            description: "Hands-on session".into(),
            file_url: "https://cdn.example.com/p.png".into(),
            ..Default::default()
        };
        let prompt = rephrase_prompt(&record, "5 March 2024, 14:30 UTC", 80);
        assert!(prompt.contains("under 80 words"));
        assert!(prompt.contains("Title: AI Workshop"));
        assert!(prompt.contains("Author: Dr. Rao"));
        assert!(prompt.contains("Date: 5 March 2024, 14:30 UTC"));
        assert!(prompt.contains("Image: https://cdn.example.com/p.png"));
    }
}

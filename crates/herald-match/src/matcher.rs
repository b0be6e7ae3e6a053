//! Announcement selection.
//!
//! Three policies, picked by configuration:
//!
//! - `first`: the first record (in store order) whose searchable text
//!   contains any keyword.
//! - `scored`: the record whose searchable text contains the most distinct
//!   keywords. Only a strictly higher score displaces the current best, so
//!   ties go to the earliest record and a score of 0 never selects anything.
//! - `exact`: the first record whose configured field, lower-cased and
//!   trimmed, equals the keyword phrase. The server normally pushes this
//!   lookup down to the store; the in-memory version here keeps `select`
//!   total over all policies.
//!
//! Records are only borrowed. Nothing here mutates them.

use herald_core::{Announcement, AnnouncementField, MatchPolicy};

use crate::normalize::Keywords;

/// A selected record and how it was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub record: &'a Announcement,
    /// Position of the record in the scanned slice.
    pub index: usize,
    /// Distinct keywords found in the searchable text (1 for exact matches).
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    policy: MatchPolicy,
    fields: Vec<AnnouncementField>,
    exact_field: AnnouncementField,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(
            MatchPolicy::default(),
            AnnouncementField::default_search_fields(),
            AnnouncementField::Title,
        )
    }
}

impl Matcher {
    #[must_use]
    pub const fn new(
        policy: MatchPolicy,
        fields: Vec<AnnouncementField>,
        exact_field: AnnouncementField,
    ) -> Self {
        Self {
            policy,
            fields,
            exact_field,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    #[must_use]
    pub const fn exact_field(&self) -> AnnouncementField {
        self.exact_field
    }

    /// Select a record for `keywords`, or `None` if nothing overlaps.
    ///
    /// Empty keywords and empty collections never match.
    #[must_use]
    pub fn select<'a>(
        &self,
        keywords: &Keywords,
        records: &'a [Announcement],
    ) -> Option<Match<'a>> {
        if keywords.is_empty() || records.is_empty() {
            return None;
        }

        let selected = match self.policy {
            MatchPolicy::First => self.first(keywords, records),
            MatchPolicy::Scored => self.best_scored(keywords, records),
            MatchPolicy::Exact => self.exact(keywords, records),
        };

        if let Some(found) = &selected {
            tracing::debug!(
                policy = %self.policy,
                index = found.index,
                score = found.score,
                title = %found.record.title,
                "announcement selected"
            );
        }
        selected
    }

    fn first<'a>(&self, keywords: &Keywords, records: &'a [Announcement]) -> Option<Match<'a>> {
        records.iter().enumerate().find_map(|(index, record)| {
            let score = score(keywords, &searchable_text(record, &self.fields));
            (score > 0).then_some(Match {
                record,
                index,
                score,
            })
        })
    }

    fn best_scored<'a>(
        &self,
        keywords: &Keywords,
        records: &'a [Announcement],
    ) -> Option<Match<'a>> {
        let mut best: Option<Match<'a>> = None;
        for (index, record) in records.iter().enumerate() {
            let score = score(keywords, &searchable_text(record, &self.fields));
            let best_score = best.map_or(0, |m| m.score);
            if score > best_score {
                best = Some(Match {
                    record,
                    index,
                    score,
                });
            }
        }
        best
    }

    /// Stored values are compared as-is, the same equality a store-side field
    /// lookup applies. Only lower-case stored values can equal the phrase.
    fn exact<'a>(&self, keywords: &Keywords, records: &'a [Announcement]) -> Option<Match<'a>> {
        let phrase = keywords.phrase();
        records.iter().enumerate().find_map(|(index, record)| {
            (record.field(self.exact_field) == phrase).then_some(Match {
                record,
                index,
                score: 1,
            })
        })
    }
}

/// Lower-cased concatenation of `fields`, separated by single spaces.
#[must_use]
pub fn searchable_text(record: &Announcement, fields: &[AnnouncementField]) -> String {
    fields
        .iter()
        .map(|field| record.field(*field).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of distinct keywords that occur as substrings of `searchable`.
#[must_use]
pub fn score(keywords: &Keywords, searchable: &str) -> usize {
    keywords
        .distinct()
        .into_iter()
        .filter(|keyword| searchable.contains(keyword))
        .count()
}

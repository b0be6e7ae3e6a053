//! Query normalization.
//!
//! Lower-cases the query and splits it on runs of spaces and commas. Tokens
//! keep their source order and duplicates are preserved; [`Keywords::distinct`]
//! is what scoring uses.

/// Ordered, non-empty, lower-case query tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    tokens: Vec<String>,
}

impl Keywords {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens with repeats removed, first occurrence kept.
    #[must_use]
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.tokens.len());
        for token in self.iter() {
            if !seen.contains(&token) {
                seen.push(token);
            }
        }
        seen
    }

    /// Tokens joined by a single space. Used as the exact-lookup value.
    #[must_use]
    pub fn phrase(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Normalize a raw query into keywords.
///
/// Absent, empty and separator-only input all produce empty [`Keywords`];
/// callers short-circuit on [`Keywords::is_empty`] before matching.
#[must_use]
pub fn normalize(raw: Option<&str>) -> Keywords {
    let Some(raw) = raw else {
        return Keywords::default();
    };
    let tokens = raw
        .to_lowercase()
        .split([' ', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();
    Keywords { tokens }
}

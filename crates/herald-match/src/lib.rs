//! # herald-match
//!
//! Selects an announcement for a free-text query.
//!
//! - [`normalize`] turns the raw query into lower-case keywords
//! - [`Matcher`] scans records under a [`MatchPolicy`](herald_core::MatchPolicy)
//! - [`format_announcement`] renders the selected record as fulfillment text

pub mod format;
pub mod matcher;
pub mod normalize;

pub use format::{format_announcement, render_timestamp};
pub use matcher::{Match, Matcher, score, searchable_text};
pub use normalize::{Keywords, normalize};

//! # herald-core
//!
//! Core types shared across all Herald crates:
//! - The [`Announcement`] record read from the document store
//! - Webhook request/response wire types dictated by the conversational platform
//! - Matching enums ([`MatchPolicy`], [`AnnouncementField`])
//! - Canned fulfillment texts
//! - Cross-cutting error types

pub mod announcement;
pub mod enums;
pub mod errors;
pub mod webhook;

pub use announcement::Announcement;
pub use enums::{AnnouncementField, MatchPolicy};
pub use errors::CoreError;
pub use webhook::{APOLOGY_TEXT, NOT_UNDERSTOOD_TEXT, WebhookRequest, WebhookResponse};

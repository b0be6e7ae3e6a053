//! The request pipeline: normalize, read, match, present or generate.
//!
//! [`fulfill`] never fails. An empty query short-circuits before any
//! collaborator is touched, and every collaborator failure below that point is
//! logged once and answered with the apology text.

use herald_core::{Announcement, MatchPolicy, WebhookResponse};
use herald_genai::{GenAiError, answer_prompt, rephrase_prompt};
use herald_match::{Keywords, format_announcement, normalize, render_timestamp};
use herald_store::StoreError;

use crate::{AppContext, FulfillmentError};

/// How a request was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Empty or unreadable query.
    NotUnderstood,
    /// A stored announcement matched and was formatted.
    Matched,
    /// Nothing matched; the generative model answered.
    Generated,
    /// A collaborator failed.
    Failed,
}

/// The platform response plus the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    pub response: WebhookResponse,
    pub outcome: Outcome,
}

impl Fulfillment {
    fn new(text: String, outcome: Outcome) -> Self {
        Self {
            response: WebhookResponse::new(text),
            outcome,
        }
    }

    fn not_understood() -> Self {
        Self {
            response: WebhookResponse::not_understood(),
            outcome: Outcome::NotUnderstood,
        }
    }

    fn failed() -> Self {
        Self {
            response: WebhookResponse::apology(),
            outcome: Outcome::Failed,
        }
    }

    /// The text sent back as `fulfillmentText`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.response.fulfillment_text
    }
}

/// Produce the fulfillment text for one query.
pub async fn fulfill(ctx: &AppContext, query: Option<&str>) -> Fulfillment {
    let keywords = normalize(query);
    if keywords.is_empty() {
        tracing::debug!("empty query");
        return Fulfillment::not_understood();
    }

    let result = answer(ctx, query.unwrap_or_default(), &keywords).await;
    let fulfillment = result.unwrap_or_else(|error| {
        tracing::error!(%error, "fulfillment failed");
        Fulfillment::failed()
    });
    tracing::info!(outcome = ?fulfillment.outcome, keywords = keywords.len(), "fulfilled");
    fulfillment
}

async fn answer(
    ctx: &AppContext,
    query: &str,
    keywords: &Keywords,
) -> Result<Fulfillment, FulfillmentError> {
    if let Some(record) = lookup(ctx, keywords).await? {
        let text = present(ctx, &record).await;
        return Ok(Fulfillment::new(text, Outcome::Matched));
    }

    let text = generate(ctx, &answer_prompt(query, ctx.word_limit)).await?;
    Ok(Fulfillment::new(text, Outcome::Generated))
}

/// Find the announcement for `keywords` under the configured policy.
async fn lookup(ctx: &AppContext, keywords: &Keywords) -> Result<Option<Announcement>, StoreError> {
    let matcher = &ctx.matcher;
    match matcher.policy() {
        MatchPolicy::Exact => {
            ctx.store
                .find_by_field(matcher.exact_field(), &keywords.phrase())
                .await
        }
        MatchPolicy::First | MatchPolicy::Scored => {
            let records = ctx.store.list_all().await?;
            Ok(matcher
                .select(keywords, &records)
                .map(|found| found.record.clone()))
        }
    }
}

/// Fixed template, or a model-written message when rephrasing is enabled.
///
/// A failed rephrase degrades to the template; the record itself was found.
async fn present(ctx: &AppContext, record: &Announcement) -> String {
    if !ctx.rephrase {
        return format_announcement(record);
    }

    let date = render_timestamp(record.timestamp);
    let prompt = rephrase_prompt(record, &date, ctx.word_limit);
    match generate(ctx, &prompt).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!(%error, record = %record.id, "rephrase failed; using template");
            format_announcement(record)
        }
    }
}

async fn generate(ctx: &AppContext, prompt: &str) -> Result<String, GenAiError> {
    let text = ctx.generator.generate(prompt).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(GenAiError::EmptyResponse);
    }
    Ok(text.to_string())
}

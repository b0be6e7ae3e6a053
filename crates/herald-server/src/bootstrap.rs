//! Startup: configuration, credentials and collaborators.
//!
//! Everything that can be wrong with the deployment is detected here, before
//! the listener binds.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use herald_config::HeraldConfig;
use herald_genai::GeminiClient;
use herald_match::Matcher;
use herald_store::FirestoreStore;

use crate::AppContext;

/// Load the layered configuration and validate it.
///
/// `.env` has already been read by [`logging::init`](crate::logging::init).
///
/// # Errors
///
/// Returns an error if the configuration cannot be read or is inconsistent.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<HeraldConfig> {
    let config = HeraldConfig::load(path).context("failed to load configuration")?;
    config
        .matching
        .validate()
        .context("invalid [matching] configuration")?;

    if !config.generative.is_configured() {
        tracing::warn!("generative API key is not set; unmatched queries will fail");
    }
    Ok(config)
}

/// Build the shared context from `config`.
///
/// # Errors
///
/// Returns an error if the store credentials are missing or unusable, or an
/// HTTP client fails to build.
pub fn build_context(config: &HeraldConfig) -> anyhow::Result<AppContext> {
    let account = config
        .store
        .service_account()
        .context("announcement store credentials")?;
    tracing::info!(
        project = config.store.project_id(&account),
        collection = %config.store.collection,
        "using announcement store"
    );
    let store = FirestoreStore::new(&config.store, account)
        .context("failed to initialize announcement store")?;

    let generative = &config.generative;
    let generator = GeminiClient::new(generative.api_key.clone(), generative.model.clone())
        .context("failed to initialize generative client")?
        .with_base_url(generative.base_url.clone())
        .with_timeout(Duration::from_secs(generative.timeout_secs));

    let matching = &config.matching;
    let matcher = Matcher::new(
        matching.policy,
        matching.fields.clone(),
        matching.exact_field,
    );
    tracing::info!(policy = %matching.policy, exact_field = %matching.exact_field, "matching");

    Ok(AppContext::new(Arc::new(store), Arc::new(generator), matcher)
        .with_word_limit(generative.word_limit)
        .with_rephrase(config.fulfillment.rephrase))
}

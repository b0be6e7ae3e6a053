//! Request-scoped collaborator failures.
//!
//! Both collaborators funnel into one error type so the pipeline has a single
//! boundary where failures are logged and turned into the apology text.

use herald_genai::GenAiError;
use herald_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("announcement store: {0}")]
    Store(#[from] StoreError),

    #[error("text generation: {0}")]
    Generation(#[from] GenAiError),
}

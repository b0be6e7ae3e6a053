//! Cross-cutting error types for Herald.
//!
//! Collaborator-specific errors (`StoreError`, `GenAiError`) live in their
//! own crates and converge in `herald-server`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A configuration or wire value named an enum variant that does not exist.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

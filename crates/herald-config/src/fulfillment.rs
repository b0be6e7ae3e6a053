//! Presentation options for matched announcements.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FulfillmentConfig {
    /// Ask the generative model to phrase a matched announcement as prose
    /// instead of using the fixed template.
    #[serde(default)]
    pub rephrase: bool,
}

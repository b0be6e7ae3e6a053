//! The immutable bundle every request handler reads from.

use std::sync::Arc;

use herald_genai::TextGenerator;
use herald_match::Matcher;
use herald_store::AnnouncementStore;

const DEFAULT_WORD_LIMIT: u32 = 100;

/// Collaborators and settings established at startup, shared read-only.
pub struct AppContext {
    pub store: Arc<dyn AnnouncementStore>,
    pub generator: Arc<dyn TextGenerator>,
    pub matcher: Matcher,
    /// Word budget stated in generation prompts.
    pub word_limit: u32,
    /// Phrase matched announcements with the generative model.
    pub rephrase: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(
        store: Arc<dyn AnnouncementStore>,
        generator: Arc<dyn TextGenerator>,
        matcher: Matcher,
    ) -> Self {
        Self {
            store,
            generator,
            matcher,
            word_limit: DEFAULT_WORD_LIMIT,
            rephrase: false,
        }
    }

    #[must_use]
    pub const fn with_word_limit(mut self, word_limit: u32) -> Self {
        self.word_limit = word_limit;
        self
    }

    #[must_use]
    pub const fn with_rephrase(mut self, rephrase: bool) -> Self {
        self.rephrase = rephrase;
        self
    }
}

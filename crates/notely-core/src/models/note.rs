use serde::{Deserialize, Serialize};

/// A stored piece of content, addressed by its subject.
///
/// `word_count` is derived from `content` and never persisted; readers
/// recompute it from the stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub subject: String,
    pub content: String,
    pub word_count: usize,
}

impl Note {
    pub fn new(subject: impl Into<String>, content: impl Into<String>) -> Self {
        let subject = subject.into();
        let content = content.into();
        let word_count = crate::validation::count_words(&content);
        Note {
            subject,
            content,
            word_count,
        }
    }
}

use serde::Deserialize;

use crate::shared::validation::{required_text, FieldErrors};

pub const POST_TITLE_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// Title and body that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostDraft {
    title: String,
    text: String,
}

impl BlogPostDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl BlogPostForm {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Every field is checked so all problems are reported at once.
    pub fn validate(self) -> Result<BlogPostDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = required_text(&mut errors, "title", &self.title, Some(POST_TITLE_MAX_CHARS));
        let text = required_text(&mut errors, "text", &self.text, None);
        errors.into_result(BlogPostDraft { title, text })
    }
}

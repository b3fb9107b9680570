use serde::Deserialize;

use crate::shared::validation::{required_text, FieldErrors};

pub const TOPIC_TEXT_MAX_CHARS: usize = 200;

/// Raw input for a new topic
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicForm {
    #[serde(default)]
    pub text: String,
}

/// Topic text that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicText(String);

impl TopicText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TopicForm {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn validate(self) -> Result<TopicText, FieldErrors> {
        let mut errors = FieldErrors::default();
        let text = required_text(&mut errors, "text", &self.text, Some(TOPIC_TEXT_MAX_CHARS));
        errors.into_result(TopicText(text))
    }
}

/// Raw input for a new or edited entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryText(String);

impl EntryText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl EntryForm {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn validate(self) -> Result<EntryText, FieldErrors> {
        let mut errors = FieldErrors::default();
        let text = required_text(&mut errors, "text", &self.text, None);
        errors.into_result(EntryText(text))
    }
}

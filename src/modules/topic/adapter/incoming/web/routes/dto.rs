use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::topic::application::domain::{
    entities::{Entry, Topic},
    forms::{EntryForm, TopicForm},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicRequest {
    #[serde(default)]
    #[schema(example = "Chess")]
    pub text: String,
}

impl From<TopicRequest> for TopicForm {
    fn from(req: TopicRequest) -> Self {
        TopicForm::new(req.text)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EntryRequest {
    #[serde(default)]
    #[schema(example = "Learned castling")]
    pub text: String,
}

impl From<EntryRequest> for EntryForm {
    fn from(req: EntryRequest) -> Self {
        EntryForm::new(req.text)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: i32,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

impl From<&Topic> for TopicResponse {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            text: topic.text.clone(),
            date_added: topic.date_added,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i32,
    pub topic_id: i32,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

impl From<&Entry> for EntryResponse {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            topic_id: entry.topic.id,
            text: entry.text.clone(),
            date_added: entry.date_added,
        }
    }
}

/// A topic page: the topic and its entries, newest first
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicDetailResponse {
    pub topic: TopicResponse,
    pub entries: Vec<EntryResponse>,
}

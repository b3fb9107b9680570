use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::domain::entities::OwnedTopic,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    /// Missing, or owned by someone else
    #[error("Topic not found")]
    NotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, topic_id: i32) -> Result<OwnedTopic, GetTopicError>;
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::{entities::Topic, forms::TopicText};

// Input DTO for creating a topic
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub text: TopicText,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Inserts the topic; the store assigns `id` and `date_added`
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError>;
}

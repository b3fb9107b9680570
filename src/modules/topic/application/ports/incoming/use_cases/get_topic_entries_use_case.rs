use async_trait::async_trait;

use crate::topic::application::domain::entities::{Entry, OwnedTopic};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicEntriesError {
    #[error("Failed to fetch entries: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicEntriesUseCase: Send + Sync {
    /// Entries of an already authorized topic, newest first
    async fn execute(&self, topic: &OwnedTopic) -> Result<Vec<Entry>, GetTopicEntriesError>;
}

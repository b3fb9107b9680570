use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, topic::application::domain::entities::Topic,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicsUseCase: Send + Sync {
    /// The owner's topics, oldest first
    async fn execute(&self, owner: UserId) -> Result<Vec<Topic>, GetTopicsError>;
}

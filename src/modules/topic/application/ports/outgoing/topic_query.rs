use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::query::SortOrder;
use crate::topic::application::domain::entities::Topic;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Topics owned by `owner`, sorted by `date_added` then id
    async fn get_topics(&self, owner: UserId, order: SortOrder)
        -> Result<Vec<Topic>, TopicQueryError>;

    /// Looks a topic up by id regardless of owner
    async fn find_topic(&self, topic_id: i32) -> Result<Option<Topic>, TopicQueryError>;
}

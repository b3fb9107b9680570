use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostsError {
    #[error("Failed to fetch posts: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    /// All posts, newest first
    async fn execute(&self) -> Result<Vec<BlogPost>, GetPostsError>;
}

use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Failed to fetch post: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: i32) -> Result<BlogPost, GetPostError>;
}

use async_trait::async_trait;

use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostDraft};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Post not found")]
    PostNotFound,
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create_post(&self, draft: BlogPostDraft) -> Result<BlogPost, BlogPostRepositoryError>;

    /// Replaces title and text; `date_added` is kept
    async fn update_post(
        &self,
        post_id: i32,
        draft: BlogPostDraft,
    ) -> Result<BlogPost, BlogPostRepositoryError>;
}

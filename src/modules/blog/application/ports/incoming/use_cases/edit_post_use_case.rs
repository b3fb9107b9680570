use async_trait::async_trait;

use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostForm};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Invalid post: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditPostUseCase: Send + Sync {
    async fn execute(&self, post_id: i32, form: BlogPostForm) -> Result<BlogPost, EditPostError>;
}

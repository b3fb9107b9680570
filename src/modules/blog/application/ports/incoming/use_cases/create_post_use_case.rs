use async_trait::async_trait;

use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostForm};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Invalid post: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, form: BlogPostForm) -> Result<BlogPost, CreatePostError>;
}

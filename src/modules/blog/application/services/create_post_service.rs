use async_trait::async_trait;

use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostForm};
use crate::blog::application::ports::{
    incoming::use_cases::{CreatePostError, CreatePostUseCase},
    outgoing::BlogPostRepository,
};

#[derive(Debug, Clone)]
pub struct CreatePostService<R>
where
    R: BlogPostRepository,
{
    repository: R,
}

impl<R> CreatePostService<R>
where
    R: BlogPostRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: BlogPostRepository,
{
    async fn execute(&self, form: BlogPostForm) -> Result<BlogPost, CreatePostError> {
        let draft = form.validate().map_err(CreatePostError::Validation)?;

        self.repository
            .create_post(draft)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))
    }
}

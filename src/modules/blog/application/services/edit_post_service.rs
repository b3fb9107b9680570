use async_trait::async_trait;

use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostForm};
use crate::blog::application::ports::{
    incoming::use_cases::{EditPostError, EditPostUseCase},
    outgoing::{BlogPostQuery, BlogPostRepository, BlogPostRepositoryError},
};

#[derive(Debug, Clone)]
pub struct EditPostService<Q, R>
where
    Q: BlogPostQuery,
    R: BlogPostRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> EditPostService<Q, R>
where
    Q: BlogPostQuery,
    R: BlogPostRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> EditPostUseCase for EditPostService<Q, R>
where
    Q: BlogPostQuery,
    R: BlogPostRepository,
{
    async fn execute(&self, post_id: i32, form: BlogPostForm) -> Result<BlogPost, EditPostError> {
        self.query
            .find_post(post_id)
            .await
            .map_err(|e| EditPostError::RepositoryError(e.to_string()))?
            .ok_or(EditPostError::NotFound)?;

        let draft = form.validate().map_err(EditPostError::Validation)?;

        self.repository
            .update_post(post_id, draft)
            .await
            .map_err(|e| match e {
                BlogPostRepositoryError::PostNotFound => EditPostError::NotFound,
                other => EditPostError::RepositoryError(other.to_string()),
            })
    }
}

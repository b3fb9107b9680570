use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::{
    incoming::use_cases::{GetPostError, GetPostUseCase},
    outgoing::BlogPostQuery,
};

#[derive(Debug, Clone)]
pub struct GetPostService<Q>
where
    Q: BlogPostQuery,
{
    query: Q,
}

impl<Q> GetPostService<Q>
where
    Q: BlogPostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostUseCase for GetPostService<Q>
where
    Q: BlogPostQuery,
{
    async fn execute(&self, post_id: i32) -> Result<BlogPost, GetPostError> {
        self.query
            .find_post(post_id)
            .await
            .map_err(|e| GetPostError::QueryFailed(e.to_string()))?
            .ok_or(GetPostError::NotFound)
    }
}

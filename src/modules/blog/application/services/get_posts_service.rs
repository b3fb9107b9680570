use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::{
    incoming::use_cases::{GetPostsError, GetPostsUseCase},
    outgoing::BlogPostQuery,
};
use crate::shared::query::SortOrder;

#[derive(Debug, Clone)]
pub struct GetPostsService<Q>
where
    Q: BlogPostQuery,
{
    query: Q,
}

impl<Q> GetPostsService<Q>
where
    Q: BlogPostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostsUseCase for GetPostsService<Q>
where
    Q: BlogPostQuery,
{
    async fn execute(&self) -> Result<Vec<BlogPost>, GetPostsError> {
        self.query
            .get_posts(SortOrder::Descending)
            .await
            .map_err(|e| GetPostsError::QueryFailed(e.to_string()))
    }
}

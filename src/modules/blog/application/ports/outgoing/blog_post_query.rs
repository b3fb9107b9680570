use async_trait::async_trait;

use crate::blog::application::domain::entities::BlogPost;
use crate::shared::query::SortOrder;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogPostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogPostQuery: Send + Sync {
    async fn get_posts(&self, order: SortOrder) -> Result<Vec<BlogPost>, BlogPostQueryError>;

    async fn find_post(&self, post_id: i32) -> Result<Option<BlogPost>, BlogPostQueryError>;
}

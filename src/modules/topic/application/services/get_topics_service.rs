use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::shared::query::SortOrder;
use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
    outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Topic>, GetTopicsError> {
        self.query
            .get_topics(owner, SortOrder::Ascending)
            .await
            .map_err(|e| GetTopicsError::QueryFailed(e.to_string()))
    }
}

use async_trait::async_trait;

use crate::shared::query::SortOrder;
use crate::topic::application::domain::entities::{Entry, OwnedTopic};
use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicEntriesError, GetTopicEntriesUseCase},
    outgoing::EntryQuery,
};

use super::ownership::assemble_entry;

#[derive(Debug, Clone)]
pub struct GetTopicEntriesService<Q>
where
    Q: EntryQuery,
{
    query: Q,
}

impl<Q> GetTopicEntriesService<Q>
where
    Q: EntryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicEntriesUseCase for GetTopicEntriesService<Q>
where
    Q: EntryQuery,
{
    async fn execute(&self, topic: &OwnedTopic) -> Result<Vec<Entry>, GetTopicEntriesError> {
        let records = self
            .query
            .get_entries(topic.id(), SortOrder::Descending)
            .await
            .map_err(|e| GetTopicEntriesError::QueryFailed(e.to_string()))?;

        Ok(records
            .into_iter()
            .map(|record| assemble_entry(record, topic.topic().clone()))
            .collect())
    }
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::{entities::Entry, forms::EntryForm};
use crate::topic::application::ports::{
    incoming::use_cases::{CreateEntryError, CreateEntryUseCase},
    outgoing::{CreateEntryData, EntryQuery, EntryRepository, TopicQuery},
};

use super::ownership::{assemble_entry, AccessError, OwnershipGate};

#[derive(Debug, Clone)]
pub struct CreateEntryService<TQ, EQ, R>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
    R: EntryRepository,
{
    gate: OwnershipGate<TQ, EQ>,
    repository: R,
}

impl<TQ, EQ, R> CreateEntryService<TQ, EQ, R>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
    R: EntryRepository,
{
    pub fn new(gate: OwnershipGate<TQ, EQ>, repository: R) -> Self {
        Self { gate, repository }
    }
}

#[async_trait]
impl<TQ, EQ, R> CreateEntryUseCase for CreateEntryService<TQ, EQ, R>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
    R: EntryRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        topic_id: i32,
        form: EntryForm,
    ) -> Result<Entry, CreateEntryError> {
        let topic = self
            .gate
            .topic_for_owner(topic_id, owner)
            .await
            .map_err(|e| match e {
                AccessError::NotFound => CreateEntryError::NotFound,
                AccessError::Query(msg) => CreateEntryError::RepositoryError(msg),
            })?;

        let text = form.validate().map_err(CreateEntryError::Validation)?;

        let record = self
            .repository
            .create_entry(CreateEntryData {
                topic_id: topic.id(),
                text,
            })
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))?;

        Ok(assemble_entry(record, topic.into_inner()))
    }
}

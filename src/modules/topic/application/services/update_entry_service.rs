use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::{entities::Entry, forms::EntryForm};
use crate::topic::application::ports::{
    incoming::use_cases::{UpdateEntryError, UpdateEntryUseCase},
    outgoing::{EntryQuery, EntryRepository, EntryRepositoryError, TopicQuery},
};

use super::ownership::{assemble_entry, AccessError, OwnershipGate};

#[derive(Debug, Clone)]
pub struct UpdateEntryService<TQ, EQ, R>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
    R: EntryRepository,
{
    gate: OwnershipGate<TQ, EQ>,
    repository: R,
}

impl<TQ, EQ, R> UpdateEntryService<TQ, EQ, R>
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
impl<TQ, EQ, R> UpdateEntryUseCase for UpdateEntryService<TQ, EQ, R>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
    R: EntryRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        entry_id: i32,
        form: EntryForm,
    ) -> Result<Entry, UpdateEntryError> {
        let current = self
            .gate
            .entry_for_owner(entry_id, owner)
            .await
            .map_err(|e| match e {
                AccessError::NotFound => UpdateEntryError::NotFound,
                AccessError::Query(msg) => UpdateEntryError::RepositoryError(msg),
            })?;

        let text = form.validate().map_err(UpdateEntryError::Validation)?;

        let record = self
            .repository
            .update_entry_text(current.id, text)
            .await
            .map_err(|e| match e {
                EntryRepositoryError::EntryNotFound => UpdateEntryError::NotFound,
                other => UpdateEntryError::RepositoryError(other.to_string()),
            })?;

        Ok(assemble_entry(record, current.topic))
    }
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Entry;
use crate::topic::application::ports::{
    incoming::use_cases::{GetEntryError, GetEntryUseCase},
    outgoing::{EntryQuery, TopicQuery},
};

use super::ownership::{AccessError, OwnershipGate};

#[derive(Debug, Clone)]
pub struct GetEntryService<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    gate: OwnershipGate<TQ, EQ>,
}

impl<TQ, EQ> GetEntryService<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    pub fn new(gate: OwnershipGate<TQ, EQ>) -> Self {
        Self { gate }
    }
}

#[async_trait]
impl<TQ, EQ> GetEntryUseCase for GetEntryService<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    async fn execute(&self, owner: UserId, entry_id: i32) -> Result<Entry, GetEntryError> {
        self.gate
            .entry_for_owner(entry_id, owner)
            .await
            .map_err(|e| match e {
                AccessError::NotFound => GetEntryError::NotFound,
                AccessError::Query(msg) => GetEntryError::QueryFailed(msg),
            })
    }
}

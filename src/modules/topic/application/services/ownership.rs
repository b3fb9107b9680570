use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::{Entry, OwnedTopic, Topic};
use crate::topic::application::ports::outgoing::{EntryQuery, EntryRecord, TopicQuery};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// Missing, or not owned by the requester. Callers cannot tell which.
    #[error("Resource not found")]
    NotFound,

    #[error("Query failed: {0}")]
    Query(String),
}

/// The only two places where a requester is checked against a record's owner.
#[derive(Debug, Clone)]
pub struct OwnershipGate<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    topics: TQ,
    entries: EQ,
}

impl<TQ, EQ> OwnershipGate<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    pub fn new(topics: TQ, entries: EQ) -> Self {
        Self { topics, entries }
    }

    pub async fn topic_for_owner(
        &self,
        topic_id: i32,
        requester: UserId,
    ) -> Result<OwnedTopic, AccessError> {
        let topic = self
            .topics
            .find_topic(topic_id)
            .await
            .map_err(|e| AccessError::Query(e.to_string()))?
            .ok_or(AccessError::NotFound)?;

        OwnedTopic::verify(topic, requester).ok_or_else(|| {
            tracing::debug!(topic_id, "Topic requested by a user who does not own it");
            AccessError::NotFound
        })
    }

    /// The entry's owner is always re-read from its topic.
    pub async fn entry_for_owner(
        &self,
        entry_id: i32,
        requester: UserId,
    ) -> Result<Entry, AccessError> {
        let record = self
            .entries
            .find_entry(entry_id)
            .await
            .map_err(|e| AccessError::Query(e.to_string()))?
            .ok_or(AccessError::NotFound)?;

        let topic = self.topic_for_owner(record.topic_id, requester).await?;

        Ok(assemble_entry(record, topic.into_inner()))
    }
}

pub(crate) fn assemble_entry(record: EntryRecord, topic: Topic) -> Entry {
    Entry {
        id: record.id,
        text: record.text,
        date_added: record.date_added,
        topic,
    }
}

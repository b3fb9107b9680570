use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::OwnedTopic;
use crate::topic::application::ports::{
    incoming::use_cases::{GetTopicError, GetTopicUseCase},
    outgoing::{EntryQuery, TopicQuery},
};

use super::ownership::{AccessError, OwnershipGate};

#[derive(Debug, Clone)]
pub struct GetTopicService<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    gate: OwnershipGate<TQ, EQ>,
}

impl<TQ, EQ> GetTopicService<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    pub fn new(gate: OwnershipGate<TQ, EQ>) -> Self {
        Self { gate }
    }
}

#[async_trait]
impl<TQ, EQ> GetTopicUseCase for GetTopicService<TQ, EQ>
where
    TQ: TopicQuery,
    EQ: EntryQuery,
{
    async fn execute(&self, owner: UserId, topic_id: i32) -> Result<OwnedTopic, GetTopicError> {
        self.gate
            .topic_for_owner(topic_id, owner)
            .await
            .map_err(|e| match e {
                AccessError::NotFound => GetTopicError::NotFound,
                AccessError::Query(msg) => GetTopicError::QueryFailed(msg),
            })
    }
}

use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, topic::application::domain::entities::Entry,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEntryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Failed to fetch entry: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetEntryUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, entry_id: i32) -> Result<Entry, GetEntryError>;
}

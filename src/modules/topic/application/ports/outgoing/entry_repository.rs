use async_trait::async_trait;

use crate::topic::application::domain::forms::EntryText;

use super::EntryRecord;

#[derive(Debug, Clone)]
pub struct CreateEntryData {
    pub topic_id: i32,
    pub text: EntryText,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Entry not found")]
    EntryNotFound,
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, data: CreateEntryData) -> Result<EntryRecord, EntryRepositoryError>;

    /// Rewrites `text` only; id, topic and `date_added` are left alone
    async fn update_entry_text(
        &self,
        entry_id: i32,
        text: EntryText,
    ) -> Result<EntryRecord, EntryRepositoryError>;
}

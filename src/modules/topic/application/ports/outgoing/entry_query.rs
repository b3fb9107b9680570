use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::query::SortOrder;

/// An entry row as persisted. Owner is resolved through `topic_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: i32,
    pub topic_id: i32,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EntryQuery: Send + Sync {
    async fn find_entry(&self, entry_id: i32) -> Result<Option<EntryRecord>, EntryQueryError>;

    async fn get_entries(
        &self,
        topic_id: i32,
        order: SortOrder,
    ) -> Result<Vec<EntryRecord>, EntryQueryError>;
}

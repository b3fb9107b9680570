use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    shared::validation::FieldErrors,
    topic::application::domain::{entities::Entry, forms::EntryForm},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEntryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Invalid entry: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        entry_id: i32,
        form: EntryForm,
    ) -> Result<Entry, UpdateEntryError>;
}

use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    shared::validation::FieldErrors,
    topic::application::domain::{entities::Entry, forms::EntryForm},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEntryError {
    #[error("Topic not found")]
    NotFound,

    #[error("Invalid entry: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    /// Ownership of the topic is checked before the form is validated
    async fn execute(
        &self,
        owner: UserId,
        topic_id: i32,
        form: EntryForm,
    ) -> Result<Entry, CreateEntryError>;
}

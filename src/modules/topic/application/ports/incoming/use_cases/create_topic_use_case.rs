use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    shared::validation::FieldErrors,
    topic::application::domain::{entities::Topic, forms::TopicForm},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Invalid topic: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, form: TopicForm) -> Result<Topic, CreateTopicError>;
}

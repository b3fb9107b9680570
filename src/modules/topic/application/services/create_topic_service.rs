use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::{entities::Topic, forms::TopicForm};
use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicError, CreateTopicUseCase},
    outgoing::{CreateTopicData, TopicRepository},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository,
{
    async fn execute(&self, owner: UserId, form: TopicForm) -> Result<Topic, CreateTopicError> {
        let text = form.validate().map_err(CreateTopicError::Validation)?;

        self.repository
            .create_topic(CreateTopicData { owner, text })
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};
use std::sync::Arc;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError,
};

use super::sea_orm_entity::topics::{ActiveModel as TopicActiveModel, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        // id and date_added come from the column defaults
        let active = TopicActiveModel {
            id: NotSet,
            user_id: Set(data.owner.into()),
            text: Set(data.text.into_inner()),
            date_added: NotSet,
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }
}

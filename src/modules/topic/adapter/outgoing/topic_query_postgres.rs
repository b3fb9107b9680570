use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::shared::query::SortOrder;
use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

use super::sea_orm_entity::topics::{Column as TopicColumn, Entity as TopicEntity};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_topics(
        &self,
        owner: UserId,
        order: SortOrder,
    ) -> Result<Vec<Topic>, TopicQueryError> {
        let models = TopicEntity::find()
            .filter(TopicColumn::UserId.eq(owner.value()))
            .order_by(TopicColumn::DateAdded, order.into())
            .order_by(TopicColumn::Id, order.into())
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_topic(&self, topic_id: i32) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}

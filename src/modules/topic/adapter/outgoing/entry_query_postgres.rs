use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::shared::query::SortOrder;
use crate::topic::application::ports::outgoing::{EntryQuery, EntryQueryError, EntryRecord};

use super::sea_orm_entity::entries::{Column as EntryColumn, Entity as EntryEntity};

#[derive(Debug, Clone)]
pub struct EntryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryQuery for EntryQueryPostgres {
    async fn find_entry(&self, entry_id: i32) -> Result<Option<EntryRecord>, EntryQueryError> {
        let model = EntryEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn get_entries(
        &self,
        topic_id: i32,
        order: SortOrder,
    ) -> Result<Vec<EntryRecord>, EntryQueryError> {
        let models = EntryEntity::find()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .order_by(EntryColumn::DateAdded, order.into())
            .order_by(EntryColumn::Id, order.into())
            .all(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, NotSet, Set};
use std::sync::Arc;

use crate::topic::application::domain::forms::EntryText;
use crate::topic::application::ports::outgoing::{
    CreateEntryData, EntryRecord, EntryRepository, EntryRepositoryError,
};

use super::sea_orm_entity::entries::{ActiveModel as EntryActiveModel, Model as EntryModel};

#[derive(Debug, Clone)]
pub struct EntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for EntryRepositoryPostgres {
    async fn create_entry(&self, data: CreateEntryData) -> Result<EntryRecord, EntryRepositoryError> {
        let active = EntryActiveModel {
            id: NotSet,
            topic_id: Set(data.topic_id),
            text: Set(data.text.into_inner()),
            date_added: NotSet,
        };

        let inserted: EntryModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| EntryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn update_entry_text(
        &self,
        entry_id: i32,
        text: EntryText,
    ) -> Result<EntryRecord, EntryRepositoryError> {
        // Unset columns are left out of the UPDATE
        let active = EntryActiveModel {
            id: Set(entry_id),
            text: Set(text.into_inner()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => EntryRepositoryError::EntryNotFound,
            other => EntryRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_record())
    }
}

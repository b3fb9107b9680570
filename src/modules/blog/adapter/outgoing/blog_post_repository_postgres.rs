use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, NotSet, Set};
use std::sync::Arc;

use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostDraft};
use crate::blog::application::ports::outgoing::{BlogPostRepository, BlogPostRepositoryError};

use super::sea_orm_entity::blog_posts::ActiveModel as PostActiveModel;

#[derive(Debug, Clone)]
pub struct BlogPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryPostgres {
    async fn create_post(&self, draft: BlogPostDraft) -> Result<BlogPost, BlogPostRepositoryError> {
        let active = PostActiveModel {
            id: NotSet,
            title: Set(draft.title().to_string()),
            text: Set(draft.text().to_string()),
            date_added: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| BlogPostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn update_post(
        &self,
        post_id: i32,
        draft: BlogPostDraft,
    ) -> Result<BlogPost, BlogPostRepositoryError> {
        let active = PostActiveModel {
            id: Set(post_id),
            title: Set(draft.title().to_string()),
            text: Set(draft.text().to_string()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => BlogPostRepositoryError::PostNotFound,
            other => BlogPostRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_domain())
    }
}

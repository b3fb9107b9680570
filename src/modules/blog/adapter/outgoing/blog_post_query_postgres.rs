use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::outgoing::{BlogPostQuery, BlogPostQueryError};
use crate::shared::query::SortOrder;

use super::sea_orm_entity::blog_posts::{Column as PostColumn, Entity as PostEntity};

#[derive(Debug, Clone)]
pub struct BlogPostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogPostQuery for BlogPostQueryPostgres {
    async fn get_posts(&self, order: SortOrder) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let models = PostEntity::find()
            .order_by(PostColumn::DateAdded, order.into())
            .order_by(PostColumn::Id, order.into())
            .all(&*self.db)
            .await
            .map_err(|e| BlogPostQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_post(&self, post_id: i32) -> Result<Option<BlogPost>, BlogPostQueryError> {
        let model = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(|e| BlogPostQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}

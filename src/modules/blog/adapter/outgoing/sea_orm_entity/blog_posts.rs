use sea_orm::entity::prelude::*;

use crate::blog::application::domain::entities::BlogPost;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> BlogPost {
        BlogPost {
            id: self.id,
            title: self.title.clone(),
            text: self.text.clone(),
            date_added: self.date_added.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

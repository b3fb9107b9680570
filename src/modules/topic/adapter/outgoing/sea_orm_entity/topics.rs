use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    pub text: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Topic {
        Topic {
            id: self.id,
            text: self.text.clone(),
            date_added: self.date_added.into(),
            owner: UserId::from(self.user_id),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

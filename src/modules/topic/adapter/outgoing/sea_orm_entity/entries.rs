use sea_orm::entity::prelude::*;

use crate::topic::application::ports::outgoing::EntryRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub topic_id: i32,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> EntryRecord {
        EntryRecord {
            id: self.id,
            topic_id: self.topic_id,
            text: self.text.clone(),
            date_added: self.date_added.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::topics::Entity",
        from = "Column::TopicId",
        to = "super::topics::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Topics,
}

impl Related<super::topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub use sea_orm_migration::prelude::*;

mod m20260127_144214_create_table_topics;
mod m20260127_144229_create_table_entries;
mod m20260127_144248_create_table_blog_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260127_144214_create_table_topics::Migration),
            Box::new(m20260127_144229_create_table_entries::Migration),
            Box::new(m20260127_144248_create_table_blog_posts::Migration),
        ]
    }
}

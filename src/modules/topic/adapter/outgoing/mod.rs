mod entry_query_postgres;
mod entry_repository_postgres;
pub mod sea_orm_entity;
mod topic_query_postgres;
mod topic_repository_postgres;

pub use entry_query_postgres::EntryQueryPostgres;
pub use entry_repository_postgres::EntryRepositoryPostgres;
pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;

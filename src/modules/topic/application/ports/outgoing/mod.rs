mod entry_query;
mod entry_repository;
mod topic_query;
mod topic_repository;

pub use entry_query::{EntryQuery, EntryQueryError, EntryRecord};
pub use entry_repository::{CreateEntryData, EntryRepository, EntryRepositoryError};
pub use topic_query::{TopicQuery, TopicQueryError};
pub use topic_repository::{CreateTopicData, TopicRepository, TopicRepositoryError};

mod create_entry_service;
mod create_topic_service;
mod get_entry_service;
mod get_topic_entries_service;
mod get_topic_service;
mod get_topics_service;
mod ownership;
mod update_entry_service;

pub use create_entry_service::CreateEntryService;
pub use create_topic_service::CreateTopicService;
pub use get_entry_service::GetEntryService;
pub use get_topic_entries_service::GetTopicEntriesService;
pub use get_topic_service::GetTopicService;
pub use get_topics_service::GetTopicsService;
pub use ownership::{AccessError, OwnershipGate};
pub use update_entry_service::UpdateEntryService;

mod create_entry;
mod create_topic;
mod dto;
mod get_entry;
mod get_topic;
mod get_topics;
mod update_entry;

pub use create_entry::__path_create_entry_handler;
pub use create_entry::create_entry_handler;
pub use create_topic::__path_create_topic_handler;
pub use create_topic::create_topic_handler;
pub use dto::{EntryRequest, EntryResponse, TopicDetailResponse, TopicRequest, TopicResponse};
pub use get_entry::__path_get_entry_handler;
pub use get_entry::get_entry_handler;
pub use get_topic::__path_get_topic_handler;
pub use get_topic::get_topic_handler;
pub use get_topics::__path_get_topics_handler;
pub use get_topics::get_topics_handler;
pub use update_entry::__path_update_entry_handler;
pub use update_entry::update_entry_handler;

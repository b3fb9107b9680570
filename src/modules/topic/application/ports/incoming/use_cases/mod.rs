mod create_entry_use_case;
mod create_topic_use_case;
mod get_entry_use_case;
mod get_topic_entries_use_case;
mod get_topic_use_case;
mod get_topics_use_case;
mod update_entry_use_case;

pub use create_entry_use_case::{CreateEntryError, CreateEntryUseCase};
pub use create_topic_use_case::{CreateTopicError, CreateTopicUseCase};
pub use get_entry_use_case::{GetEntryError, GetEntryUseCase};
pub use get_topic_entries_use_case::{GetTopicEntriesError, GetTopicEntriesUseCase};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use update_entry_use_case::{UpdateEntryError, UpdateEntryUseCase};

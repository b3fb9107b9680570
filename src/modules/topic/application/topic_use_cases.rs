use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateEntryUseCase, CreateTopicUseCase, GetEntryUseCase, GetTopicEntriesUseCase,
    GetTopicUseCase, GetTopicsUseCase, UpdateEntryUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub get_entries: Arc<dyn GetTopicEntriesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub create_entry: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub get_entry: Arc<dyn GetEntryUseCase + Send + Sync>,
    pub update_entry: Arc<dyn UpdateEntryUseCase + Send + Sync>,
}

use std::sync::Arc;

use actix_web::web;

use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::ports::incoming::use_cases::{
    CreatePostUseCase, EditPostUseCase, GetPostUseCase, GetPostsUseCase,
};
use crate::blog::application::services::{
    CreatePostService, EditPostService, GetPostService, GetPostsService,
};
use crate::tests::support::in_memory::{InMemoryBlog, InMemoryLearningLog};
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateEntryUseCase, CreateTopicUseCase, GetEntryUseCase, GetTopicEntriesUseCase,
    GetTopicUseCase, GetTopicsUseCase, UpdateEntryUseCase,
};
use crate::topic::application::services::{
    CreateEntryService, CreateTopicService, GetEntryService, GetTopicEntriesService,
    GetTopicService, GetTopicsService, OwnershipGate, UpdateEntryService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;

pub struct TestAppStateBuilder {
    topic: TopicUseCases,
    blog: BlogUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                get_list: Arc::new(StubGetTopicsUseCase::default()),
                get_single: Arc::new(StubGetTopicUseCase::default()),
                get_entries: Arc::new(StubGetTopicEntriesUseCase::default()),
                create: Arc::new(StubCreateTopicUseCase::default()),
                create_entry: Arc::new(StubCreateEntryUseCase::default()),
                get_entry: Arc::new(StubGetEntryUseCase::default()),
                update_entry: Arc::new(StubUpdateEntryUseCase::default()),
            },
            blog: BlogUseCases {
                get_list: Arc::new(StubGetPostsUseCase::default()),
                get_single: Arc::new(StubGetPostUseCase::default()),
                create: Arc::new(StubCreatePostUseCase::default()),
                edit: Arc::new(StubEditPostUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_topics<U>(mut self, uc: U) -> Self
    where
        U: GetTopicsUseCase + Send + Sync + 'static,
    {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_topic<U>(mut self, uc: U) -> Self
    where
        U: GetTopicUseCase + Send + Sync + 'static,
    {
        self.topic.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_topic_entries<U>(mut self, uc: U) -> Self
    where
        U: GetTopicEntriesUseCase + Send + Sync + 'static,
    {
        self.topic.get_entries = Arc::new(uc);
        self
    }

    pub fn with_create_topic<U>(mut self, uc: U) -> Self
    where
        U: CreateTopicUseCase + Send + Sync + 'static,
    {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_create_entry<U>(mut self, uc: U) -> Self
    where
        U: CreateEntryUseCase + Send + Sync + 'static,
    {
        self.topic.create_entry = Arc::new(uc);
        self
    }

    pub fn with_get_entry<U>(mut self, uc: U) -> Self
    where
        U: GetEntryUseCase + Send + Sync + 'static,
    {
        self.topic.get_entry = Arc::new(uc);
        self
    }

    pub fn with_update_entry<U>(mut self, uc: U) -> Self
    where
        U: UpdateEntryUseCase + Send + Sync + 'static,
    {
        self.topic.update_entry = Arc::new(uc);
        self
    }

    pub fn with_get_posts<U>(mut self, uc: U) -> Self
    where
        U: GetPostsUseCase + Send + Sync + 'static,
    {
        self.blog.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_post<U>(mut self, uc: U) -> Self
    where
        U: GetPostUseCase + Send + Sync + 'static,
    {
        self.blog.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_post<U>(mut self, uc: U) -> Self
    where
        U: CreatePostUseCase + Send + Sync + 'static,
    {
        self.blog.create = Arc::new(uc);
        self
    }

    pub fn with_edit_post<U>(mut self, uc: U) -> Self
    where
        U: EditPostUseCase + Send + Sync + 'static,
    {
        self.blog.edit = Arc::new(uc);
        self
    }

    /// Wires every topic and entry use case to the real services over `store`.
    pub fn with_learning_log(mut self, store: InMemoryLearningLog) -> Self {
        let gate = OwnershipGate::new(store.clone(), store.clone());

        self.topic = TopicUseCases {
            get_list: Arc::new(GetTopicsService::new(store.clone())),
            get_single: Arc::new(GetTopicService::new(gate.clone())),
            get_entries: Arc::new(GetTopicEntriesService::new(store.clone())),
            create: Arc::new(CreateTopicService::new(store.clone())),
            create_entry: Arc::new(CreateEntryService::new(gate.clone(), store.clone())),
            get_entry: Arc::new(GetEntryService::new(gate.clone())),
            update_entry: Arc::new(UpdateEntryService::new(gate, store)),
        };
        self
    }

    pub fn with_blog(mut self, store: InMemoryBlog) -> Self {
        self.blog = BlogUseCases {
            get_list: Arc::new(GetPostsService::new(store.clone())),
            get_single: Arc::new(GetPostService::new(store.clone())),
            create: Arc::new(CreatePostService::new(store.clone())),
            edit: Arc::new(EditPostService::new(store.clone(), store)),
        };
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: self.topic,
            blog: self.blog,
        })
    }
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostForm};
use crate::blog::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase, EditPostError, EditPostUseCase, GetPostError,
    GetPostUseCase, GetPostsError, GetPostsUseCase,
};
use crate::topic::application::domain::entities::{Entry, OwnedTopic, Topic};
use crate::topic::application::domain::forms::{EntryForm, TopicForm};
use crate::topic::application::ports::incoming::use_cases::{
    CreateEntryError, CreateEntryUseCase, CreateTopicError, CreateTopicUseCase, GetEntryError,
    GetEntryUseCase, GetTopicEntriesError, GetTopicEntriesUseCase, GetTopicError,
    GetTopicUseCase, GetTopicsError, GetTopicsUseCase, UpdateEntryError, UpdateEntryUseCase,
};

// Topics

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(topics: Vec<Topic>) -> Self {
        Self { result: Ok(topics) }
    }

    pub fn error(err: GetTopicsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetTopicsUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

/// Holds a topic and answers like the owner gate would.
#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<Topic, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn success(topic: Topic) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn error(err: GetTopicError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetTopicUseCase {
    fn default() -> Self {
        Self::error(GetTopicError::NotFound)
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, owner: UserId, _topic_id: i32) -> Result<OwnedTopic, GetTopicError> {
        let topic = self.result.clone()?;
        OwnedTopic::verify(topic, owner).ok_or(GetTopicError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubGetTopicEntriesUseCase {
    result: Result<Vec<Entry>, GetTopicEntriesError>,
}

impl StubGetTopicEntriesUseCase {
    pub fn success(entries: Vec<Entry>) -> Self {
        Self {
            result: Ok(entries),
        }
    }

    pub fn error(err: GetTopicEntriesError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetTopicEntriesUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl GetTopicEntriesUseCase for StubGetTopicEntriesUseCase {
    async fn execute(&self, _topic: &OwnedTopic) -> Result<Vec<Entry>, GetTopicEntriesError> {
        self.result.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubCreateTopicUseCase {
    result: Option<Result<Topic, CreateTopicError>>,
}

impl StubCreateTopicUseCase {
    pub fn success(topic: Topic) -> Self {
        Self {
            result: Some(Ok(topic)),
        }
    }

    pub fn error(err: CreateTopicError) -> Self {
        Self {
            result: Some(Err(err)),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _owner: UserId, _form: TopicForm) -> Result<Topic, CreateTopicError> {
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("StubCreateTopicUseCase not configured for this test"))
    }
}

// Entries

#[derive(Clone, Default)]
pub struct StubCreateEntryUseCase {
    result: Option<Result<Entry, CreateEntryError>>,
}

impl StubCreateEntryUseCase {
    pub fn success(entry: Entry) -> Self {
        Self {
            result: Some(Ok(entry)),
        }
    }

    pub fn error(err: CreateEntryError) -> Self {
        Self {
            result: Some(Err(err)),
        }
    }
}

#[async_trait]
impl CreateEntryUseCase for StubCreateEntryUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _topic_id: i32,
        _form: EntryForm,
    ) -> Result<Entry, CreateEntryError> {
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("StubCreateEntryUseCase not configured for this test"))
    }
}

#[derive(Clone, Default)]
pub struct StubUpdateEntryUseCase {
    result: Option<Result<Entry, UpdateEntryError>>,
}

impl StubUpdateEntryUseCase {
    pub fn success(entry: Entry) -> Self {
        Self {
            result: Some(Ok(entry)),
        }
    }

    pub fn error(err: UpdateEntryError) -> Self {
        Self {
            result: Some(Err(err)),
        }
    }
}

#[async_trait]
impl UpdateEntryUseCase for StubUpdateEntryUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _entry_id: i32,
        _form: EntryForm,
    ) -> Result<Entry, UpdateEntryError> {
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("StubUpdateEntryUseCase not configured for this test"))
    }
}

#[derive(Clone)]
pub struct StubGetEntryUseCase {
    result: Result<Entry, GetEntryError>,
}

impl StubGetEntryUseCase {
    pub fn success(entry: Entry) -> Self {
        Self { result: Ok(entry) }
    }

    pub fn error(err: GetEntryError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetEntryUseCase {
    fn default() -> Self {
        Self::error(GetEntryError::NotFound)
    }
}

#[async_trait]
impl GetEntryUseCase for StubGetEntryUseCase {
    async fn execute(&self, _owner: UserId, _entry_id: i32) -> Result<Entry, GetEntryError> {
        self.result.clone()
    }
}

// Blog

#[derive(Clone)]
pub struct StubGetPostsUseCase {
    result: Result<Vec<BlogPost>, GetPostsError>,
}

impl StubGetPostsUseCase {
    pub fn success(posts: Vec<BlogPost>) -> Self {
        Self { result: Ok(posts) }
    }

    pub fn error(err: GetPostsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetPostsUseCase {
    fn default() -> Self {
        Self::success(vec![])
    }
}

#[async_trait]
impl GetPostsUseCase for StubGetPostsUseCase {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetPostsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetPostUseCase {
    result: Result<BlogPost, GetPostError>,
}

impl StubGetPostUseCase {
    pub fn success(post: BlogPost) -> Self {
        Self { result: Ok(post) }
    }

    pub fn error(err: GetPostError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetPostUseCase {
    fn default() -> Self {
        Self::error(GetPostError::NotFound)
    }
}

#[async_trait]
impl GetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _post_id: i32) -> Result<BlogPost, GetPostError> {
        self.result.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubCreatePostUseCase {
    result: Option<Result<BlogPost, CreatePostError>>,
}

impl StubCreatePostUseCase {
    pub fn success(post: BlogPost) -> Self {
        Self {
            result: Some(Ok(post)),
        }
    }

    pub fn error(err: CreatePostError) -> Self {
        Self {
            result: Some(Err(err)),
        }
    }
}

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _form: BlogPostForm) -> Result<BlogPost, CreatePostError> {
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("StubCreatePostUseCase not configured for this test"))
    }
}

#[derive(Clone, Default)]
pub struct StubEditPostUseCase {
    result: Option<Result<BlogPost, EditPostError>>,
}

impl StubEditPostUseCase {
    pub fn success(post: BlogPost) -> Self {
        Self {
            result: Some(Ok(post)),
        }
    }

    pub fn error(err: EditPostError) -> Self {
        Self {
            result: Some(Err(err)),
        }
    }
}

#[async_trait]
impl EditPostUseCase for StubEditPostUseCase {
    async fn execute(&self, _post_id: i32, _form: BlogPostForm) -> Result<BlogPost, EditPostError> {
        self.result
            .clone()
            .unwrap_or_else(|| unimplemented!("StubEditPostUseCase not configured for this test"))
    }
}

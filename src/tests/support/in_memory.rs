//! In-memory implementations of every outgoing persistence port.
//!
//! Ids increase from 1 and `date_added` comes from a clock that advances one
//! minute per insert, so ordering assertions are deterministic.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostDraft};
use crate::blog::application::ports::outgoing::{
    BlogPostQuery, BlogPostQueryError, BlogPostRepository, BlogPostRepositoryError,
};
use crate::shared::query::SortOrder;
use crate::topic::application::domain::entities::Topic;
use crate::topic::application::domain::forms::EntryText;
use crate::topic::application::ports::outgoing::{
    CreateEntryData, CreateTopicData, EntryQuery, EntryQueryError, EntryRecord, EntryRepository,
    EntryRepositoryError, TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

#[derive(Default)]
struct LearningLogState {
    topics: Vec<Topic>,
    entries: Vec<EntryRecord>,
    ticks: i64,
}

impl LearningLogState {
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        epoch() + Duration::minutes(self.ticks)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryLearningLog {
    state: Arc<Mutex<LearningLogState>>,
}

impl InMemoryLearningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a topic without validation
    pub fn seed_topic(&self, owner: UserId, text: &str) -> Topic {
        let mut state = self.state.lock().unwrap();
        let date_added = state.now();
        Self::push_topic(&mut state, owner, text.to_string(), date_added)
    }

    pub fn seed_topic_at(&self, owner: UserId, text: &str, date_added: DateTime<Utc>) -> Topic {
        let mut state = self.state.lock().unwrap();
        Self::push_topic(&mut state, owner, text.to_string(), date_added)
    }

    pub fn seed_entry(&self, topic_id: i32, text: &str) -> EntryRecord {
        let mut state = self.state.lock().unwrap();
        let date_added = state.now();
        Self::push_entry(&mut state, topic_id, text.to_string(), date_added)
    }

    pub fn seed_entry_at(&self, topic_id: i32, text: &str, date_added: DateTime<Utc>) -> EntryRecord {
        let mut state = self.state.lock().unwrap();
        Self::push_entry(&mut state, topic_id, text.to_string(), date_added)
    }

    pub fn topic_count(&self) -> usize {
        self.state.lock().unwrap().topics.len()
    }

    pub fn entry_count(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }

    pub fn entry_record(&self, entry_id: i32) -> Option<EntryRecord> {
        let state = self.state.lock().unwrap();
        state.entries.iter().find(|e| e.id == entry_id).cloned()
    }

    fn push_topic(
        state: &mut LearningLogState,
        owner: UserId,
        text: String,
        date_added: DateTime<Utc>,
    ) -> Topic {
        let topic = Topic {
            id: state.topics.len() as i32 + 1,
            text,
            date_added,
            owner,
        };
        state.topics.push(topic.clone());
        topic
    }

    fn push_entry(
        state: &mut LearningLogState,
        topic_id: i32,
        text: String,
        date_added: DateTime<Utc>,
    ) -> EntryRecord {
        let record = EntryRecord {
            id: state.entries.len() as i32 + 1,
            topic_id,
            text,
            date_added,
        };
        state.entries.push(record.clone());
        record
    }
}

#[async_trait]
impl TopicQuery for InMemoryLearningLog {
    async fn get_topics(
        &self,
        owner: UserId,
        order: SortOrder,
    ) -> Result<Vec<Topic>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        let mut topics: Vec<Topic> = state
            .topics
            .iter()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect();
        topics.sort_by(|a, b| order.compare(&(a.date_added, a.id), &(b.date_added, b.id)));
        Ok(topics)
    }

    async fn find_topic(&self, topic_id: i32) -> Result<Option<Topic>, TopicQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.topics.iter().find(|t| t.id == topic_id).cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryLearningLog {
    async fn create_topic(&self, data: CreateTopicData) -> Result<Topic, TopicRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let date_added = state.now();
        Ok(Self::push_topic(
            &mut state,
            data.owner,
            data.text.into_inner(),
            date_added,
        ))
    }
}

#[async_trait]
impl EntryQuery for InMemoryLearningLog {
    async fn find_entry(&self, entry_id: i32) -> Result<Option<EntryRecord>, EntryQueryError> {
        Ok(self.entry_record(entry_id))
    }

    async fn get_entries(
        &self,
        topic_id: i32,
        order: SortOrder,
    ) -> Result<Vec<EntryRecord>, EntryQueryError> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<EntryRecord> = state
            .entries
            .iter()
            .filter(|e| e.topic_id == topic_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| order.compare(&(a.date_added, a.id), &(b.date_added, b.id)));
        Ok(entries)
    }
}

#[async_trait]
impl EntryRepository for InMemoryLearningLog {
    async fn create_entry(&self, data: CreateEntryData) -> Result<EntryRecord, EntryRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let date_added = state.now();
        Ok(Self::push_entry(
            &mut state,
            data.topic_id,
            data.text.into_inner(),
            date_added,
        ))
    }

    async fn update_entry_text(
        &self,
        entry_id: i32,
        text: EntryText,
    ) -> Result<EntryRecord, EntryRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let record = state
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or(EntryRepositoryError::EntryNotFound)?;
        record.text = text.into_inner();
        Ok(record.clone())
    }
}

#[derive(Default)]
struct BlogState {
    posts: Vec<BlogPost>,
    ticks: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryBlog {
    state: Arc<Mutex<BlogState>>,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    pub fn post(&self, post_id: i32) -> Option<BlogPost> {
        let state = self.state.lock().unwrap();
        state.posts.iter().find(|p| p.id == post_id).cloned()
    }
}

#[async_trait]
impl BlogPostQuery for InMemoryBlog {
    async fn get_posts(&self, order: SortOrder) -> Result<Vec<BlogPost>, BlogPostQueryError> {
        let state = self.state.lock().unwrap();
        let mut posts = state.posts.clone();
        posts.sort_by(|a, b| order.compare(&(a.date_added, a.id), &(b.date_added, b.id)));
        Ok(posts)
    }

    async fn find_post(&self, post_id: i32) -> Result<Option<BlogPost>, BlogPostQueryError> {
        Ok(self.post(post_id))
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlog {
    async fn create_post(&self, draft: BlogPostDraft) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.ticks += 1;
        let post = BlogPost {
            id: state.posts.len() as i32 + 1,
            title: draft.title().to_string(),
            text: draft.text().to_string(),
            date_added: epoch() + Duration::minutes(state.ticks),
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(
        &self,
        post_id: i32,
        draft: BlogPostDraft,
    ) -> Result<BlogPost, BlogPostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(BlogPostRepositoryError::PostNotFound)?;
        post.title = draft.title().to_string();
        post.text = draft.text().to_string();
        Ok(post.clone())
    }
}

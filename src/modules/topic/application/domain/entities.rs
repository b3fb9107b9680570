use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

/// A subject the owner is learning about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: i32,
    pub text: String,
    pub date_added: DateTime<Utc>,
    pub owner: UserId,
}

/// A note recorded under a topic. It has no owner of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i32,
    pub text: String,
    pub date_added: DateTime<Utc>,
    pub topic: Topic,
}

impl Entry {
    pub fn owner(&self) -> UserId {
        self.topic.owner
    }
}

/// A topic that has been checked against a specific requester.
///
/// Only `verify` builds one, so holding an `OwnedTopic` proves the
/// requester owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedTopic(Topic);

impl OwnedTopic {
    pub fn verify(topic: Topic, requester: UserId) -> Option<Self> {
        if topic.owner == requester {
            Some(Self(topic))
        } else {
            None
        }
    }

    pub fn id(&self) -> i32 {
        self.0.id
    }

    pub fn topic(&self) -> &Topic {
        &self.0
    }

    pub fn into_inner(self) -> Topic {
        self.0
    }
}

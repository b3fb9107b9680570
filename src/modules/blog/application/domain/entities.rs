use chrono::{DateTime, Utc};
use serde::Serialize;

/// A public post. Posts have no owner; anyone may edit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

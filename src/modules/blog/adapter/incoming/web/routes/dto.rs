use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blog::application::domain::{entities::BlogPost, forms::BlogPostForm};

#[derive(Debug, Deserialize, ToSchema)]
pub struct BlogPostRequest {
    #[serde(default)]
    #[schema(example = "Hello")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "First post")]
    pub text: String,
}

impl From<BlogPostRequest> for BlogPostForm {
    fn from(req: BlogPostRequest) -> Self {
        BlogPostForm::new(req.title, req.text)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub date_added: DateTime<Utc>,
}

impl From<&BlogPost> for BlogPostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            text: post.text.clone(),
            date_added: post.date_added,
        }
    }
}

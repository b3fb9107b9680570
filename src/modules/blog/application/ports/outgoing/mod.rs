mod blog_post_query;
mod blog_post_repository;

pub use blog_post_query::{BlogPostQuery, BlogPostQueryError};
pub use blog_post_repository::{BlogPostRepository, BlogPostRepositoryError};

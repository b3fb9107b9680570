mod create_post;
mod dto;
mod edit_post;
mod get_post;
mod get_posts;

pub use create_post::__path_create_post_handler;
pub use create_post::create_post_handler;
pub use dto::{BlogPostRequest, BlogPostResponse};
pub use edit_post::__path_edit_post_handler;
pub use edit_post::edit_post_handler;
pub use get_post::__path_get_post_handler;
pub use get_post::get_post_handler;
pub use get_posts::__path_get_posts_handler;
pub use get_posts::get_posts_handler;

mod create_post_service;
mod edit_post_service;
mod get_post_service;
mod get_posts_service;

pub use create_post_service::CreatePostService;
pub use edit_post_service::EditPostService;
pub use get_post_service::GetPostService;
pub use get_posts_service::GetPostsService;

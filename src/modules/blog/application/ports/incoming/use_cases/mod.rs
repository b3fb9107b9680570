mod create_post_use_case;
mod edit_post_use_case;
mod get_post_use_case;
mod get_posts_use_case;

pub use create_post_use_case::{CreatePostError, CreatePostUseCase};
pub use edit_post_use_case::{EditPostError, EditPostUseCase};
pub use get_post_use_case::{GetPostError, GetPostUseCase};
pub use get_posts_use_case::{GetPostsError, GetPostsUseCase};

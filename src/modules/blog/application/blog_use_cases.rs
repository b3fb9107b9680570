use std::sync::Arc;

use crate::blog::application::ports::incoming::use_cases::{
    CreatePostUseCase, EditPostUseCase, GetPostUseCase, GetPostsUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub get_list: Arc<dyn GetPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPostUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub edit: Arc<dyn EditPostUseCase + Send + Sync>,
}

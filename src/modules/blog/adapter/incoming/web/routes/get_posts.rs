use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    blog::application::ports::incoming::use_cases::GetPostsError,
    shared::api::ApiResponse,
    AppState,
};

use super::dto::BlogPostResponse;

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "blog",
    responses(
        (status = 200, description = "All posts, newest first", body = inline(SuccessResponse<Vec<BlogPostResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/posts")]
pub async fn get_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blog.get_list.execute().await {
        Ok(posts) => ApiResponse::success(
            posts
                .iter()
                .map(BlogPostResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetPostsError::QueryFailed(msg)) => {
            tracing::error!("Failed to list posts: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

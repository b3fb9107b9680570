use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    blog::application::ports::incoming::use_cases::GetPostError,
    shared::api::ApiResponse,
    AppState,
};

use super::dto::BlogPostResponse;

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "blog",
    params(("post_id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = inline(SuccessResponse<BlogPostResponse>)),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/posts/{post_id}")]
pub async fn get_post_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    match data.blog.get_single.execute(path.into_inner()).await {
        Ok(post) => ApiResponse::success(BlogPostResponse::from(&post)),
        Err(err) => map_get_post_error(err),
    }
}

fn map_get_post_error(err: GetPostError) -> HttpResponse {
    match err {
        GetPostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        GetPostError::QueryFailed(msg) => {
            tracing::error!("Failed to load post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    blog::application::{
        domain::forms::BlogPostForm, ports::incoming::use_cases::CreatePostError,
    },
    shared::api::ApiResponse,
    AppState,
};

use super::dto::{BlogPostRequest, BlogPostResponse};

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "blog",
    request_body = BlogPostRequest,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<BlogPostResponse>)),
        (status = 400, description = "Form validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    data: web::Data<AppState>,
    payload: web::Json<BlogPostRequest>,
) -> impl Responder {
    let form = BlogPostForm::from(payload.into_inner());

    match data.blog.create.execute(form).await {
        Ok(post) => ApiResponse::created(BlogPostResponse::from(&post)),
        Err(err) => map_create_post_error(err),
    }
}

fn map_create_post_error(err: CreatePostError) -> HttpResponse {
    match err {
        CreatePostError::Validation(fields) => ApiResponse::validation_failed(fields),
        CreatePostError::RepositoryError(msg) => {
            tracing::error!("Failed to create post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{put, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    blog::application::{domain::forms::BlogPostForm, ports::incoming::use_cases::EditPostError},
    shared::api::ApiResponse,
    AppState,
};

use super::dto::{BlogPostRequest, BlogPostResponse};

#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = "blog",
    params(("post_id" = i32, Path, description = "Post id")),
    request_body = BlogPostRequest,
    responses(
        (status = 200, description = "Post updated", body = inline(SuccessResponse<BlogPostResponse>)),
        (status = 400, description = "Form validation failed", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/posts/{post_id}")]
pub async fn edit_post_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<BlogPostRequest>,
) -> impl Responder {
    let form = BlogPostForm::from(payload.into_inner());

    match data.blog.edit.execute(path.into_inner(), form).await {
        Ok(post) => ApiResponse::success(BlogPostResponse::from(&post)),
        Err(err) => map_edit_post_error(err),
    }
}

fn map_edit_post_error(err: EditPostError) -> HttpResponse {
    match err {
        EditPostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        EditPostError::Validation(fields) => ApiResponse::validation_failed(fields),
        EditPostError::RepositoryError(msg) => {
            tracing::error!("Failed to edit post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

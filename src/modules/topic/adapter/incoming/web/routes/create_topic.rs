use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::forms::TopicForm, ports::incoming::use_cases::CreateTopicError,
    },
    AppState,
};

use super::dto::{TopicRequest, TopicResponse};

#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = TopicRequest,
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicResponse>)),
        (status = 400, description = "Form validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<TopicRequest>,
) -> impl Responder {
    let form = TopicForm::from(payload.into_inner());

    match data.topic.create.execute(user.user_id, form).await {
        Ok(topic) => ApiResponse::created(TopicResponse::from(&topic)),
        Err(err) => map_create_topic_error(err),
    }
}

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::Validation(fields) => ApiResponse::validation_failed(fields),
        CreateTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to create topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

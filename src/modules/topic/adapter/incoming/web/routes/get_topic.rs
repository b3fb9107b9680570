use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{GetTopicEntriesError, GetTopicError},
    AppState,
};

use super::dto::{EntryResponse, TopicDetailResponse, TopicResponse};

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = i32, Path, description = "Topic id")),
    responses(
        (status = 200, description = "The topic with its entries, newest first", body = inline(SuccessResponse<TopicDetailResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such topic for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    let topic = match data.topic.get_single.execute(user.user_id, topic_id).await {
        Ok(topic) => topic,
        Err(err) => return map_get_topic_error(err),
    };

    match data.topic.get_entries.execute(&topic).await {
        Ok(entries) => ApiResponse::success(TopicDetailResponse {
            topic: TopicResponse::from(topic.topic()),
            entries: entries.iter().map(EntryResponse::from).collect(),
        }),
        Err(GetTopicEntriesError::QueryFailed(msg)) => {
            tracing::error!("Failed to list entries of topic {}: {}", topic_id, msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_get_topic_error(err: GetTopicError) -> HttpResponse {
    match err {
        GetTopicError::NotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        GetTopicError::QueryFailed(msg) => {
            tracing::error!("Failed to load topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

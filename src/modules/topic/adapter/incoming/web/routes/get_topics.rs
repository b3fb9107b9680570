use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicsError,
    AppState,
};

use super::dto::TopicResponse;

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "Topics of the current user, oldest first", body = inline(SuccessResponse<Vec<TopicResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics")]
pub async fn get_topics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.get_list.execute(user.user_id).await {
        Ok(topics) => {
            let response = topics.iter().map(TopicResponse::from).collect::<Vec<_>>();
            ApiResponse::success(response)
        }

        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> HttpResponse {
    match err {
        GetTopicsError::QueryFailed(msg) => {
            tracing::error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

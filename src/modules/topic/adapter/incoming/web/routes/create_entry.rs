use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::forms::EntryForm, ports::incoming::use_cases::CreateEntryError,
    },
    AppState,
};

use super::dto::{EntryRequest, EntryResponse};

#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/entries",
    tag = "entries",
    params(("topic_id" = i32, Path, description = "Topic the entry is added to")),
    request_body = EntryRequest,
    responses(
        (status = 201, description = "Entry created", body = inline(SuccessResponse<EntryResponse>)),
        (status = 400, description = "Form validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such topic for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/{topic_id}/entries")]
pub async fn create_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<EntryRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let form = EntryForm::from(payload.into_inner());

    match data
        .topic
        .create_entry
        .execute(user.user_id, topic_id, form)
        .await
    {
        Ok(entry) => ApiResponse::created(EntryResponse::from(&entry)),
        Err(err) => map_create_entry_error(err),
    }
}

fn map_create_entry_error(err: CreateEntryError) -> HttpResponse {
    match err {
        CreateEntryError::NotFound => ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found"),
        CreateEntryError::Validation(fields) => ApiResponse::validation_failed(fields),
        CreateEntryError::RepositoryError(msg) => {
            tracing::error!("Failed to create entry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

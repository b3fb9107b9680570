use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetEntryError,
    AppState,
};

use super::dto::EntryResponse;

/// Current state of an entry, used to prefill the edit form
#[utoipa::path(
    get,
    path = "/api/entries/{entry_id}",
    tag = "entries",
    params(("entry_id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "The entry", body = inline(SuccessResponse<EntryResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such entry for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/entries/{entry_id}")]
pub async fn get_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .topic
        .get_entry
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(entry) => ApiResponse::success(EntryResponse::from(&entry)),
        Err(err) => map_get_entry_error(err),
    }
}

fn map_get_entry_error(err: GetEntryError) -> HttpResponse {
    match err {
        GetEntryError::NotFound => ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found"),
        GetEntryError::QueryFailed(msg) => {
            tracing::error!("Failed to load entry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

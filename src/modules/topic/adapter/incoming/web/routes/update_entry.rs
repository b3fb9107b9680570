use actix_web::{put, web, HttpResponse, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{
        domain::forms::EntryForm, ports::incoming::use_cases::UpdateEntryError,
    },
    AppState,
};

use super::dto::{EntryRequest, EntryResponse};

#[utoipa::path(
    put,
    path = "/api/entries/{entry_id}",
    tag = "entries",
    params(("entry_id" = i32, Path, description = "Entry id")),
    request_body = EntryRequest,
    responses(
        (status = 200, description = "Entry text replaced", body = inline(SuccessResponse<EntryResponse>)),
        (status = 400, description = "Form validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such entry for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/entries/{entry_id}")]
pub async fn update_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
    payload: web::Json<EntryRequest>,
) -> impl Responder {
    let entry_id = path.into_inner();
    let form = EntryForm::from(payload.into_inner());

    match data
        .topic
        .update_entry
        .execute(user.user_id, entry_id, form)
        .await
    {
        Ok(entry) => ApiResponse::success(EntryResponse::from(&entry)),
        Err(err) => map_update_entry_error(err),
    }
}

fn map_update_entry_error(err: UpdateEntryError) -> HttpResponse {
    match err {
        UpdateEntryError::NotFound => ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found"),
        UpdateEntryError::Validation(fields) => ApiResponse::validation_failed(fields),
        UpdateEntryError::RepositoryError(msg) => {
            tracing::error!("Failed to update entry: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

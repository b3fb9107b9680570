use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::blog::adapter::incoming::web::routes::{BlogPostRequest, BlogPostResponse};
use crate::topic::adapter::incoming::web::routes::{
    EntryRequest, EntryResponse, TopicDetailResponse, TopicRequest, TopicResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learning Log API",
        version = "1.0.0",
        description = "Personal learning journal (topics and entries) and a public blog"
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,

        // Entry endpoints
        crate::topic::adapter::incoming::web::routes::create_entry_handler,
        crate::topic::adapter::incoming::web::routes::get_entry_handler,
        crate::topic::adapter::incoming::web::routes::update_entry_handler,

        // Blog endpoints
        crate::blog::adapter::incoming::web::routes::get_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_post_handler,
        crate::blog::adapter::incoming::web::routes::create_post_handler,
        crate::blog::adapter::incoming::web::routes::edit_post_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<TopicResponse>,
            ErrorResponse,
            ErrorDetail,

            // Learning log DTOs
            TopicRequest,
            TopicResponse,
            TopicDetailResponse,
            EntryRequest,
            EntryResponse,

            // Blog DTOs
            BlogPostRequest,
            BlogPostResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Topics owned by the signed-in user"),
        (name = "entries", description = "Entries recorded under a topic"),
        (name = "blog", description = "Public blog posts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the identity provider"))
                        .build(),
                ),
            )
        }
    }
}

pub mod modules;
pub use modules::auth;
pub use modules::blog;
pub use modules::topic;
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::blog::adapter::outgoing::{BlogPostQueryPostgres, BlogPostRepositoryPostgres};
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::services::{
    CreatePostService, EditPostService, GetPostService, GetPostsService,
};
use crate::config::AppConfig;
use crate::topic::adapter::outgoing::{
    EntryQueryPostgres, EntryRepositoryPostgres, TopicQueryPostgres, TopicRepositoryPostgres,
};
use crate::topic::application::services::{
    CreateEntryService, CreateTopicService, GetEntryService, GetTopicEntriesService,
    GetTopicService, GetTopicsService, OwnershipGate, UpdateEntryService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub blog: BlogUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    let server_url = config.server_url();
    info!(environment = %config.environment, "Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    // Learning log
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let entry_query = EntryQueryPostgres::new(Arc::clone(&db_arc));
    let entry_repo = EntryRepositoryPostgres::new(Arc::clone(&db_arc));
    let gate = OwnershipGate::new(topic_query.clone(), entry_query.clone());

    let topic = TopicUseCases {
        get_list: Arc::new(GetTopicsService::new(topic_query)),
        get_single: Arc::new(GetTopicService::new(gate.clone())),
        get_entries: Arc::new(GetTopicEntriesService::new(entry_query)),
        create: Arc::new(CreateTopicService::new(topic_repo)),
        create_entry: Arc::new(CreateEntryService::new(gate.clone(), entry_repo.clone())),
        get_entry: Arc::new(GetEntryService::new(gate.clone())),
        update_entry: Arc::new(UpdateEntryService::new(gate, entry_repo)),
    };

    // Blog
    let post_query = BlogPostQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = BlogPostRepositoryPostgres::new(Arc::clone(&db_arc));

    let blog = BlogUseCases {
        get_list: Arc::new(GetPostsService::new(post_query.clone())),
        get_single: Arc::new(GetPostService::new(post_query.clone())),
        create: Arc::new(CreatePostService::new(post_repo.clone())),
        edit: Arc::new(EditPostService::new(post_query, post_repo)),
    };

    let state = AppState { topic, blog };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server terminated with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    configure_api(cfg);
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    // Topics & entries
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_entry_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_entry_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_entry_handler);
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::get_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::edit_post_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}

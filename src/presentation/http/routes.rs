// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, sitemap, tuskers},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::profile))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/v1/articles/recent", get(articles::recent_articles))
        .route("/api/v1/articles/search", get(articles::search_articles))
        .route("/api/v1/articles/tags/all", get(articles::list_article_tags))
        .route(
            "/api/v1/articles/category/{category}",
            get(articles::articles_by_category),
        )
        .route("/api/v1/articles/tag/{tag}", get(articles::articles_by_tag))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article_by_id)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/tuskers",
            get(tuskers::list_tuskers).post(tuskers::create_tusker),
        )
        .route("/api/v1/tuskers/random", get(tuskers::random_tuskers))
        .route("/api/v1/tuskers/tags/all", get(tuskers::list_tusker_tags))
        .route(
            "/api/v1/tuskers/search/by-name",
            get(tuskers::tuskers_by_name),
        )
        .route(
            "/api/v1/tuskers/search/by-category",
            get(tuskers::tuskers_by_category),
        )
        .route(
            "/api/v1/tuskers/by-slug/{slug}",
            get(tuskers::get_tusker_by_slug),
        )
        .route(
            "/api/v1/tuskers/{id}",
            get(tuskers::get_tusker_by_id)
                .put(tuskers::update_tusker)
                .delete(tuskers::delete_tusker),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

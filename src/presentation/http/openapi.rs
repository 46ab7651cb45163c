// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::recent_articles,
        crate::presentation::http::controllers::articles::search_articles,
        crate::presentation::http::controllers::articles::articles_by_category,
        crate::presentation::http::controllers::articles::articles_by_tag,
        crate::presentation::http::controllers::articles::list_article_tags,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::tuskers::list_tuskers,
        crate::presentation::http::controllers::tuskers::random_tuskers,
        crate::presentation::http::controllers::tuskers::tuskers_by_name,
        crate::presentation::http::controllers::tuskers::tuskers_by_category,
        crate::presentation::http::controllers::tuskers::list_tusker_tags,
        crate::presentation::http::controllers::tuskers::get_tusker_by_slug,
        crate::presentation::http::controllers::tuskers::get_tusker_by_id,
        crate::presentation::http::controllers::tuskers::create_tusker,
        crate::presentation::http::controllers::tuskers::update_tusker,
        crate::presentation::http::controllers::tuskers::delete_tusker,
        crate::presentation::http::controllers::sitemap::sitemap,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::ProfileResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::tuskers::CreateTuskerRequest,
            crate::presentation::http::controllers::tuskers::UpdateTuskerRequest,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::TuskerDto
        )
    ),
    tags(
        (name = "Auth", description = "Admin authentication endpoints"),
        (name = "Articles", description = "Article management endpoints"),
        (name = "Tuskers", description = "Tusker profile endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Tusker API",
        description = "Content backend for tusker profiles and articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let http = Http::new(HttpAuthScheme::Bearer);
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

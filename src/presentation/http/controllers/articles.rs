// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{
        ArticlesByCategoryQuery, ArticlesByTagQuery, GetArticleByIdQuery, GetArticleBySlugQuery,
        RecentArticlesQuery, SearchArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    /// Optional explicit slug; must already be in canonical form.
    #[serde(default)]
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses((status = 200, description = "All articles, newest first.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/recent",
    params(RecentParams),
    responses((status = 200, description = "Most recently published articles.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn recent_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RecentParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .recent_articles(RecentArticlesQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(SearchParams),
    responses((status = 200, description = "Articles matching the query.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery { query: params.q })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/category/{category}",
    params(("category" = String, Path, description = "Category to match, case-insensitive")),
    responses((status = 200, body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn articles_by_category(
    Extension(state): Extension<HttpState>,
    Path(category): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .articles_by_category(ArticlesByCategoryQuery { category })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/tag/{tag}",
    params(("tag" = String, Path, description = "Tag to match, case-insensitive")),
    responses((status = 200, body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn articles_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .articles_by_tag(ArticlesByTagQuery { tag })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/tags/all",
    responses((status = 200, description = "Distinct tags across all articles.", body = [String])),
    tag = "Articles"
)]
pub async fn list_article_tags(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<String>>> {
    state
        .services
        .article_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Canonical article slug")),
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, description = "No article with that slug.")
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses((status = 200, body = ArticleDto), (status = 404, description = "Not found.")),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, body = ArticleDto),
        (status = 400, description = "Validation failed, including underivable or malformed slugs."),
        (status = 409, description = "Explicit slug already in use.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        images: payload.images,
        category: payload.category,
        tags: payload.tags,
        author: payload.author,
        publish_date: payload.publish_date,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, body = ArticleDto),
        (status = 404, description = "Not found."),
        (status = 409, description = "Explicit slug already in use.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        images: payload.images,
        category: payload.category,
        tags: payload.tags,
        author: payload.author,
        publish_date: payload.publish_date,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses((status = 200, description = "Deleted."), (status = 404, description = "Not found.")),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

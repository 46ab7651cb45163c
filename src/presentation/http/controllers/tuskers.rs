// src/presentation/http/controllers/tuskers.rs
use crate::application::{
    commands::tuskers::{CreateTuskerCommand, DeleteTuskerCommand, UpdateTuskerCommand},
    dto::TuskerDto,
    queries::tuskers::{
        GetTuskerByIdQuery, GetTuskerBySlugQuery, RandomTuskersQuery, TuskersByCategoryQuery,
        TuskersByNameQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTuskerRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTuskerRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub age: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_urls: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RandomParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NameSearchParams {
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategorySearchParams {
    pub category: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/tuskers",
    responses((status = 200, description = "All tusker profiles.", body = [TuskerDto])),
    tag = "Tuskers"
)]
pub async fn list_tuskers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TuskerDto>>> {
    state
        .services
        .tusker_queries
        .list_tuskers()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tuskers/random",
    params(RandomParams),
    responses((status = 200, description = "Random sample of tusker profiles.", body = [TuskerDto])),
    tag = "Tuskers"
)]
pub async fn random_tuskers(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RandomParams>,
) -> HttpResult<Json<Vec<TuskerDto>>> {
    state
        .services
        .tusker_queries
        .random_tuskers(RandomTuskersQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tuskers/search/by-name",
    params(NameSearchParams),
    responses((status = 200, body = [TuskerDto])),
    tag = "Tuskers"
)]
pub async fn tuskers_by_name(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NameSearchParams>,
) -> HttpResult<Json<Vec<TuskerDto>>> {
    state
        .services
        .tusker_queries
        .tuskers_by_name(TuskersByNameQuery { name: params.name })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tuskers/search/by-category",
    params(CategorySearchParams),
    responses((status = 200, body = [TuskerDto])),
    tag = "Tuskers"
)]
pub async fn tuskers_by_category(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CategorySearchParams>,
) -> HttpResult<Json<Vec<TuskerDto>>> {
    state
        .services
        .tusker_queries
        .tuskers_by_category(TuskersByCategoryQuery {
            category: params.category,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tuskers/tags/all",
    responses((status = 200, description = "Distinct tags across all tuskers.", body = [String])),
    tag = "Tuskers"
)]
pub async fn list_tusker_tags(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<String>>> {
    state
        .services
        .tusker_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tuskers/by-slug/{slug}",
    params(("slug" = String, Path, description = "Canonical tusker slug")),
    responses((status = 200, body = TuskerDto), (status = 404, description = "Not found.")),
    tag = "Tuskers"
)]
pub async fn get_tusker_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TuskerDto>> {
    state
        .services
        .tusker_queries
        .get_tusker_by_slug(GetTuskerBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tuskers/{id}",
    params(("id" = i64, Path, description = "Tusker id")),
    responses((status = 200, body = TuskerDto), (status = 404, description = "Not found.")),
    tag = "Tuskers"
)]
pub async fn get_tusker_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TuskerDto>> {
    state
        .services
        .tusker_queries
        .get_tusker_by_id(GetTuskerByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/tuskers",
    request_body = CreateTuskerRequest,
    responses(
        (status = 200, body = TuskerDto),
        (status = 400, description = "Validation failed, including underivable or malformed slugs."),
        (status = 409, description = "Explicit slug already in use.")
    ),
    security(("bearerAuth" = [])),
    tag = "Tuskers"
)]
pub async fn create_tusker(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTuskerRequest>,
) -> HttpResult<Json<TuskerDto>> {
    let command = CreateTuskerCommand {
        name: payload.name,
        slug: payload.slug,
        age: payload.age,
        location: payload.location,
        status: payload.status,
        category: payload.category,
        description: payload.description,
        tags: payload.tags,
        image_urls: payload.image_urls,
    };

    state
        .services
        .tusker_commands
        .create_tusker(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/tuskers/{id}",
    params(("id" = i64, Path, description = "Tusker id")),
    request_body = UpdateTuskerRequest,
    responses(
        (status = 200, body = TuskerDto),
        (status = 404, description = "Not found."),
        (status = 409, description = "Explicit slug already in use.")
    ),
    security(("bearerAuth" = [])),
    tag = "Tuskers"
)]
pub async fn update_tusker(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTuskerRequest>,
) -> HttpResult<Json<TuskerDto>> {
    let command = UpdateTuskerCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        age: payload.age,
        location: payload.location,
        status: payload.status,
        category: payload.category,
        description: payload.description,
        tags: payload.tags,
        image_urls: payload.image_urls,
    };

    state
        .services
        .tusker_commands
        .update_tusker(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/tuskers/{id}",
    params(("id" = i64, Path, description = "Tusker id")),
    responses((status = 200, description = "Deleted."), (status = 404, description = "Not found.")),
    security(("bearerAuth" = [])),
    tag = "Tuskers"
)]
pub async fn delete_tusker(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .tusker_commands
        .delete_tusker(&user, DeleteTuskerCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

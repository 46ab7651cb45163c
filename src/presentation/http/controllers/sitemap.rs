// src/presentation/http/controllers/sitemap.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses((status = 200, description = "Sitemap XML for search engine crawlers.")),
    tag = "System"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let xml = state.services.sitemap.build_sitemap().await.into_http()?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

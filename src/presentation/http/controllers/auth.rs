// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, body = UserDto),
        (status = 409, description = "Username already taken.")
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .register(RegisterUserCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, body = AuthTokenDto),
        (status = 401, description = "Invalid credentials.")
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthTokenDto>> {
    state
        .services
        .user_commands
        .login(LoginCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses((status = 200, body = ProfileResponse), (status = 401, description = "Not authenticated.")),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn profile(Authenticated(user): Authenticated) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        id: user.id.into(),
        username: user.username,
        issued_at: user.issued_at,
        expires_at: user.expires_at,
    })
}

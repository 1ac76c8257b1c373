//! Authentication API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use crate::application::IdentityService;
use crate::interfaces::http::common::{respond, ApiError, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::middleware::TOKEN_COOKIE;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity: Arc<IdentityService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserInfo>),
        (status = 400, description = "Missing fields or email already registered")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<UserInfo> {
    let user = state
        .identity
        .register(&request.email, &request.password, request.role.into())
        .await?;

    respond(StatusCode::CREATED, "user registered", UserInfo::from(user))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued; also set as the `token` cookie", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Response, ApiError> {
    let auth = state.identity.login(&request.email, &request.password).await?;

    let cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        TOKEN_COOKIE, auth.token, auth.expires_in
    );
    let cookie = HeaderValue::from_str(&cookie).map_err(|_| ApiError::internal())?;

    let body = LoginResponse {
        token: auth.token,
        token_type: auth.token_type,
        expires_in: auth.expires_in,
        user: UserInfo::from(auth.user),
    };

    let mut response = respond(StatusCode::OK, "login successful", body).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}

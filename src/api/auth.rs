//! Authentication and profile endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{LoginRequest, OtpRequest, RegisterRequest, UpdateProfileRequest, User},
};

use super::{AuthenticatedUser, DataResponse, JsonBody, MessageResponse, UserDataResponse};

/// Login response with bearer token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Register a new user (default role: user)
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 422, description = "Validation failed or email taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("berhasil register")),
    ))
}

/// Login with email and password, returns a 7-day bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad credentials or validation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state.services.auth.login(request).await?;

    Ok(Json(LoginResponse {
        message: "login berhasil".to_string(),
        token,
    }))
}

/// Confirm the caller's email. An email-match check against the
/// authenticated identity, not a one-time-code protocol.
#[utoipa::path(
    post,
    path = "/otp-confirmation",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = OtpRequest,
    responses(
        (status = 200, description = "Email verified", body = MessageResponse),
        (status = 400, description = "Email mismatch", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn otp_confirmation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    JsonBody(request): JsonBody<OtpRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.auth.confirm_otp(&claims, &request.email).await?;

    Ok(Json(MessageResponse::new("email is verified")))
}

/// The caller's own user record, resolved from the bearer token
#[utoipa::path(
    get,
    path = "/user-info",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's user record", body = UserDataResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn user_info(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<DataResponse<User>>> {
    let user = state.services.auth.user_info(claims.user_id).await?;

    Ok(Json(DataResponse::shown(user)))
}

/// Upsert the caller's profile: created on first edit, overwritten after
#[utoipa::path(
    post,
    path = "/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_profile(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    JsonBody(request): JsonBody<UpdateProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .auth
        .update_profile(claims.user_id, request)
        .await?;

    Ok(Json(MessageResponse::new("profile berhasil diupdate")))
}

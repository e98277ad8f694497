//! Peminjaman (loan record) endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{CreatePeminjaman, PeminjamanDetails},
};

use super::{
    AuthenticatedUser, DataResponse, JsonBody, MessageResponse, PeminjamanDataResponse,
    PeminjamanListResponse,
};

/// Create a loan for the calling user on the given book
#[utoipa::path(
    post,
    path = "/buku/{id}/peminjaman",
    tag = "peminjaman",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Buku ID")),
    request_body = CreatePeminjaman,
    responses(
        (status = 200, description = "Loan created", body = MessageResponse),
        (status = 400, description = "Unknown book or loan already exists", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_peminjaman(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(buku_id): Path<i32>,
    JsonBody(request): JsonBody<CreatePeminjaman>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_user()?;

    state
        .services
        .loans
        .create(claims.user_id, buku_id, request)
        .await?;

    Ok(Json(MessageResponse::new("success add peminjaman")))
}

/// List every loan in the system with borrower and book details.
/// Module-wide read: not scoped to the caller.
#[utoipa::path(
    get,
    path = "/peminjaman",
    tag = "peminjaman",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All loans", body = PeminjamanListResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_peminjaman(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<DataResponse<Vec<PeminjamanDetails>>>> {
    claims.require_user()?;

    let loans = state.services.loans.list().await?;
    Ok(Json(DataResponse::shown(loans)))
}

/// Get a loan by ID with borrower and book details
#[utoipa::path(
    get,
    path = "/peminjaman/{id}",
    tag = "peminjaman",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Peminjaman ID")),
    responses(
        (status = 200, description = "Loan details", body = PeminjamanDataResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_peminjaman(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<DataResponse<PeminjamanDetails>>> {
    claims.require_user()?;

    let loan = state.services.loans.get_by_id(id).await?;
    Ok(Json(DataResponse::shown(loan)))
}

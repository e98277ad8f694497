//! Buku management endpoints (staff only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{BukuPayload, BukuWithKategori},
};

use super::{
    AuthenticatedUser, BukuDataResponse, BukuListResponse, DataResponse, JsonBody, MessageResponse,
};

/// List all books with their kategori attached
#[utoipa::path(
    get,
    path = "/buku",
    tag = "buku",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All books", body = BukuListResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_buku(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<DataResponse<Vec<BukuWithKategori>>>> {
    claims.require_petugas()?;

    let books = state.services.catalog.list_buku().await?;
    Ok(Json(DataResponse::shown(books)))
}

/// Get a buku by ID with its kategori attached
#[utoipa::path(
    get,
    path = "/buku/{id}",
    tag = "buku",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Buku ID")),
    responses(
        (status = 200, description = "Buku details", body = BukuDataResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse),
        (status = 404, description = "Buku not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_buku(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<DataResponse<BukuWithKategori>>> {
    claims.require_petugas()?;

    let buku = state.services.catalog.get_buku(id).await?;
    Ok(Json(DataResponse::shown(buku)))
}

/// Create a new buku. The kategori must exist first.
#[utoipa::path(
    post,
    path = "/buku",
    tag = "buku",
    security(("bearer_auth" = [])),
    request_body = BukuPayload,
    responses(
        (status = 201, description = "Buku created", body = MessageResponse),
        (status = 400, description = "Invalid input or unknown kategori", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_buku(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    JsonBody(payload): JsonBody<BukuPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    claims.require_petugas()?;

    state.services.catalog.create_buku(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("data berhasil ditambahkan")),
    ))
}

/// Update a buku. The kategori must exist first.
#[utoipa::path(
    put,
    path = "/buku/{id}",
    tag = "buku",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Buku ID")),
    request_body = BukuPayload,
    responses(
        (status = 200, description = "Buku updated", body = MessageResponse),
        (status = 400, description = "Invalid input or missing row", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_buku(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<BukuPayload>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_petugas()?;

    state.services.catalog.update_buku(id, payload).await?;

    Ok(Json(MessageResponse::new(format!(
        "berhasil ubah data dengan id {}",
        id
    ))))
}

/// Delete a buku
#[utoipa::path(
    delete,
    path = "/buku/{id}",
    tag = "buku",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Buku ID")),
    responses(
        (status = 200, description = "Buku deleted", body = MessageResponse),
        (status = 400, description = "Still on loan or missing row", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_buku(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_petugas()?;

    state.services.catalog.delete_buku(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "berhasil hapus data dengan id {}",
        id
    ))))
}

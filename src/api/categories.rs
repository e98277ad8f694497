//! Kategori management endpoints (staff only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::category::{KategoriPayload, KategoriWithBuku},
};

use super::{
    AuthenticatedUser, DataResponse, JsonBody, KategoriDataResponse, KategoriListResponse,
    MessageResponse,
};

/// List all categories with their books attached
#[utoipa::path(
    get,
    path = "/kategori",
    tag = "kategori",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All categories", body = KategoriListResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_kategori(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<DataResponse<Vec<KategoriWithBuku>>>> {
    claims.require_petugas()?;

    let categories = state.services.catalog.list_kategori().await?;
    Ok(Json(DataResponse::shown(categories)))
}

/// Get a kategori by ID with its books attached
#[utoipa::path(
    get,
    path = "/kategori/{id}",
    tag = "kategori",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Kategori ID")),
    responses(
        (status = 200, description = "Kategori details", body = KategoriDataResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse),
        (status = 404, description = "Kategori not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_kategori(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<DataResponse<KategoriWithBuku>>> {
    claims.require_petugas()?;

    let kategori = state.services.catalog.get_kategori(id).await?;
    Ok(Json(DataResponse::shown(kategori)))
}

/// Create a new kategori
#[utoipa::path(
    post,
    path = "/kategori",
    tag = "kategori",
    security(("bearer_auth" = [])),
    request_body = KategoriPayload,
    responses(
        (status = 201, description = "Kategori created", body = MessageResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_kategori(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    JsonBody(payload): JsonBody<KategoriPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    claims.require_petugas()?;

    state.services.catalog.create_kategori(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("data berhasil ditambahkan")),
    ))
}

/// Update a kategori
#[utoipa::path(
    put,
    path = "/kategori/{id}",
    tag = "kategori",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Kategori ID")),
    request_body = KategoriPayload,
    responses(
        (status = 200, description = "Kategori updated", body = MessageResponse),
        (status = 400, description = "Invalid input or missing row", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_kategori(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<KategoriPayload>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_petugas()?;

    state.services.catalog.update_kategori(id, payload).await?;

    Ok(Json(MessageResponse::new(format!(
        "berhasil ubah data dengan id {}",
        id
    ))))
}

/// Delete a kategori. Fails while books still reference it.
#[utoipa::path(
    delete,
    path = "/kategori/{id}",
    tag = "kategori",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Kategori ID")),
    responses(
        (status = 200, description = "Kategori deleted", body = MessageResponse),
        (status = 400, description = "Still referenced or missing row", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated or wrong role", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_kategori(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_petugas()?;

    state.services.catalog.delete_kategori(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "berhasil hapus data dengan id {}",
        id
    ))))
}

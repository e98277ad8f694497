//! Buku (book) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::category::Kategori;

/// Buku model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Buku {
    pub id: i32,
    pub judul: String,
    pub ringkasan: String,
    /// Publication year, kept as a string
    pub tahun_terbit: String,
    /// Page count
    pub halaman: i32,
    pub kategori_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Buku with its kategori eagerly attached, for list and detail responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BukuWithKategori {
    pub id: i32,
    pub judul: String,
    pub ringkasan: String,
    pub tahun_terbit: String,
    pub halaman: i32,
    pub kategori_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub kategori: Kategori,
}

/// Create/update buku request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BukuPayload {
    #[validate(length(min = 1, message = "judul is required"))]
    pub judul: String,
    #[validate(length(min = 1, message = "ringkasan is required"))]
    pub ringkasan: String,
    #[validate(length(min = 4, max = 4, message = "tahun_terbit must be a 4-digit year"))]
    pub tahun_terbit: String,
    #[validate(range(min = 1, message = "halaman must be positive"))]
    pub halaman: i32,
    pub kategori_id: i32,
}

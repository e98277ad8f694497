//! Kategori (category) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::Buku;

/// Kategori model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Kategori {
    pub id: i32,
    pub nama: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kategori with its books eagerly attached, for list and detail responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KategoriWithBuku {
    pub id: i32,
    pub nama: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub buku: Vec<Buku>,
}

impl KategoriWithBuku {
    pub fn new(kategori: Kategori, buku: Vec<Buku>) -> Self {
        Self {
            id: kategori.id,
            nama: kategori.nama,
            created_at: kategori.created_at,
            updated_at: kategori.updated_at,
            buku,
        }
    }
}

/// Create/update kategori request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct KategoriPayload {
    #[validate(length(min = 1, message = "nama is required"))]
    pub nama: String,
}

//! Peminjaman (loan record) model and related types
//!
//! The core entity of the service. A loan links one user to one book with a
//! borrow date and a return-due date. Rows are create-only through the API:
//! there is no status field, no update and no delete.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Buku;
use super::user::UserPublic;

/// Peminjaman model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Peminjaman {
    pub id: i32,
    pub user_id: i32,
    pub buku_id: i32,
    pub tanggal_pinjam: NaiveDate,
    pub tanggal_kembali: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Peminjaman joined with borrower identity and book details
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PeminjamanDetails {
    pub id: i32,
    pub user_id: i32,
    pub buku_id: i32,
    pub tanggal_pinjam: NaiveDate,
    pub tanggal_kembali: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserPublic,
    pub buku: Buku,
}

/// Create peminjaman request.
///
/// Both dates must parse as calendar dates; no ordering between them is
/// enforced (a tanggal_kembali before tanggal_pinjam is accepted).
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePeminjaman {
    pub tanggal_pinjam: NaiveDate,
    pub tanggal_kembali: NaiveDate,
}

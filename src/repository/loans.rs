//! Loans repository for database operations
//!
//! The peminjaman table carries the core invariants of the service:
//! `UNIQUE (user_id, buku_id)` and foreign keys to users and bukus. The
//! database is the final authority for both; this layer only translates
//! constraint violations into client-visible errors.

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Buku,
        loan::{Peminjaman, PeminjamanDetails},
        user::UserPublic,
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

/// Shared SELECT for loan rows joined with borrower and book
const PEMINJAMAN_DETAILS: &str = r#"
    SELECT p.id, p.user_id, p.buku_id, p.tanggal_pinjam, p.tanggal_kembali,
           p.created_at, p.updated_at,
           u.nama as u_nama, u.email as u_email, u.role as u_role,
           b.judul as b_judul, b.ringkasan as b_ringkasan,
           b.tahun_terbit as b_tahun_terbit, b.halaman as b_halaman,
           b.kategori_id as b_kategori_id, b.created_at as b_created_at,
           b.updated_at as b_updated_at
    FROM peminjaman p
    JOIN users u ON p.user_id = u.id
    JOIN bukus b ON p.buku_id = b.id
"#;

fn row_to_details(row: &sqlx::postgres::PgRow) -> Result<PeminjamanDetails, sqlx::Error> {
    let role: String = row.get("u_role");
    Ok(PeminjamanDetails {
        id: row.get("id"),
        user_id: row.get("user_id"),
        buku_id: row.get("buku_id"),
        tanggal_pinjam: row.get("tanggal_pinjam"),
        tanggal_kembali: row.get("tanggal_kembali"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        user: UserPublic {
            id: row.get("user_id"),
            nama: row.get("u_nama"),
            email: row.get("u_email"),
            role: role
                .parse()
                .map_err(|e: String| sqlx::Error::Decode(e.into()))?,
        },
        buku: Buku {
            id: row.get("buku_id"),
            judul: row.get("b_judul"),
            ringkasan: row.get("b_ringkasan"),
            tahun_terbit: row.get("b_tahun_terbit"),
            halaman: row.get("b_halaman"),
            kategori_id: row.get("b_kategori_id"),
            created_at: row.get("b_created_at"),
            updated_at: row.get("b_updated_at"),
        },
    })
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new loan row.
    ///
    /// A second row for the same `(user_id, buku_id)` pair never inserts,
    /// regardless of dates: the composite unique index rejects it and the
    /// violation surfaces as a conflict.
    pub async fn create(
        &self,
        user_id: i32,
        buku_id: i32,
        tanggal_pinjam: NaiveDate,
        tanggal_kembali: NaiveDate,
    ) -> AppResult<Peminjaman> {
        sqlx::query_as::<_, Peminjaman>(
            r#"
            INSERT INTO peminjaman (user_id, buku_id, tanggal_pinjam, tanggal_kembali)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(buku_id)
        .bind(tanggal_pinjam)
        .bind(tanggal_kembali)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(
                e,
                "gagal tambah data: peminjaman sudah ada",
                &format!("buku id {} tidak ditemukan.", buku_id),
            )
        })
    }

    /// List every loan in the system, joined with borrower and book.
    ///
    /// Deliberately unscoped: any caller with the user role reads all
    /// records, not just their own.
    pub async fn list_details(&self) -> AppResult<Vec<PeminjamanDetails>> {
        let rows = sqlx::query(&format!("{} ORDER BY p.id", PEMINJAMAN_DETAILS))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row_to_details(row).map_err(AppError::from))
            .collect()
    }

    /// Get a loan by ID, joined with borrower and book
    pub async fn get_details_by_id(&self, id: i32) -> AppResult<PeminjamanDetails> {
        let row = sqlx::query(&format!("{} WHERE p.id = $1", PEMINJAMAN_DETAILS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("peminjaman dengan id {} tidak ditemukan", id))
            })?;

        row_to_details(&row).map_err(AppError::from)
    }
}

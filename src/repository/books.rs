//! Books repository for database operations

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Buku, BukuPayload, BukuWithKategori},
        category::Kategori,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

/// Shared SELECT for book rows joined with their kategori
const BUKU_WITH_KATEGORI: &str = r#"
    SELECT b.id, b.judul, b.ringkasan, b.tahun_terbit, b.halaman, b.kategori_id,
           b.created_at, b.updated_at,
           k.id as k_id, k.nama as k_nama, k.created_at as k_created_at,
           k.updated_at as k_updated_at
    FROM bukus b
    JOIN kategoris k ON b.kategori_id = k.id
"#;

fn row_to_buku_with_kategori(row: &sqlx::postgres::PgRow) -> BukuWithKategori {
    BukuWithKategori {
        id: row.get("id"),
        judul: row.get("judul"),
        ringkasan: row.get("ringkasan"),
        tahun_terbit: row.get("tahun_terbit"),
        halaman: row.get("halaman"),
        kategori_id: row.get("kategori_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        kategori: Kategori {
            id: row.get("k_id"),
            nama: row.get("k_nama"),
            created_at: row.get("k_created_at"),
            updated_at: row.get("k_updated_at"),
        },
    }
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check whether a buku exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bukus WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// List all books, each with its kategori attached
    pub async fn list_with_category(&self) -> AppResult<Vec<BukuWithKategori>> {
        let rows = sqlx::query(&format!("{} ORDER BY b.id", BUKU_WITH_KATEGORI))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(row_to_buku_with_kategori).collect())
    }

    /// Get a buku by ID with its kategori attached
    pub async fn get_with_category(&self, id: i32) -> AppResult<BukuWithKategori> {
        let row = sqlx::query(&format!("{} WHERE b.id = $1", BUKU_WITH_KATEGORI))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("buku dengan id {} tidak ditemukan", id)))?;

        Ok(row_to_buku_with_kategori(&row))
    }

    /// Insert a new buku
    pub async fn create(&self, payload: &BukuPayload) -> AppResult<Buku> {
        sqlx::query_as::<_, Buku>(
            r#"
            INSERT INTO bukus (judul, ringkasan, tahun_terbit, halaman, kategori_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.judul)
        .bind(&payload.ringkasan)
        .bind(&payload.tahun_terbit)
        .bind(payload.halaman)
        .bind(payload.kategori_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(
                e,
                "gagal tambah data",
                &format!("kategori id {} tidak ditemukan.", payload.kategori_id),
            )
        })
    }

    /// Update a buku. Returns the number of rows affected; a missing row
    /// reports zero rather than an error.
    pub async fn update(&self, id: i32, payload: &BukuPayload) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE bukus
            SET judul = $1, ringkasan = $2, tahun_terbit = $3, halaman = $4,
                kategori_id = $5, updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&payload.judul)
        .bind(&payload.ringkasan)
        .bind(&payload.tahun_terbit)
        .bind(payload.halaman)
        .bind(payload.kategori_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(
                e,
                "gagal ubah data",
                &format!("kategori id {} tidak ditemukan.", payload.kategori_id),
            )
        })?;

        Ok(result.rows_affected())
    }

    /// Delete a buku. Loan rows reference bukus with ON DELETE RESTRICT.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM bukus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_constraint(
                    e,
                    "gagal hapus data",
                    "gagal hapus data: buku masih dipinjam",
                )
            })?;

        Ok(result.rows_affected())
    }
}

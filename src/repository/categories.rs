//! Categories repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Buku,
        category::{Kategori, KategoriWithBuku},
    },
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check whether a kategori exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM kategoris WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// List all categories, each with its books attached
    pub async fn list_with_books(&self) -> AppResult<Vec<KategoriWithBuku>> {
        let categories = sqlx::query_as::<_, Kategori>("SELECT * FROM kategoris ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Buku>("SELECT * FROM bukus ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let result = categories
            .into_iter()
            .map(|kategori| {
                let buku = books
                    .iter()
                    .filter(|b| b.kategori_id == kategori.id)
                    .cloned()
                    .collect();
                KategoriWithBuku::new(kategori, buku)
            })
            .collect();

        Ok(result)
    }

    /// Get a kategori by ID with its books attached
    pub async fn get_with_books(&self, id: i32) -> AppResult<KategoriWithBuku> {
        let kategori = sqlx::query_as::<_, Kategori>("SELECT * FROM kategoris WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("kategori dengan id {} tidak ditemukan", id))
            })?;

        let buku = sqlx::query_as::<_, Buku>("SELECT * FROM bukus WHERE kategori_id = $1 ORDER BY id")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(KategoriWithBuku::new(kategori, buku))
    }

    /// Insert a new kategori
    pub async fn create(&self, nama: &str) -> AppResult<Kategori> {
        let kategori = sqlx::query_as::<_, Kategori>(
            "INSERT INTO kategoris (nama) VALUES ($1) RETURNING *",
        )
        .bind(nama)
        .fetch_one(&self.pool)
        .await?;

        Ok(kategori)
    }

    /// Update a kategori. Returns the number of rows affected; a missing row
    /// reports zero rather than an error.
    pub async fn update(&self, id: i32, nama: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE kategoris SET nama = $1, updated_at = NOW() WHERE id = $2")
            .bind(nama)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a kategori. Books reference kategoris with ON DELETE RESTRICT,
    /// so deleting a referenced kategori fails with a foreign-key violation,
    /// translated here to a bad request.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM kategoris WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_constraint(
                    e,
                    "gagal hapus data",
                    "gagal hapus data: kategori masih dipakai buku",
                )
            })?;

        Ok(result.rows_affected())
    }
}

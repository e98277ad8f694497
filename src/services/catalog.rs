//! Catalog management service (kategori and buku)

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Buku, BukuPayload, BukuWithKategori},
        category::{Kategori, KategoriPayload, KategoriWithBuku},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // --- kategori ---

    pub async fn list_kategori(&self) -> AppResult<Vec<KategoriWithBuku>> {
        self.repository.categories.list_with_books().await
    }

    pub async fn get_kategori(&self, id: i32) -> AppResult<KategoriWithBuku> {
        self.repository.categories.get_with_books(id).await
    }

    pub async fn create_kategori(&self, payload: KategoriPayload) -> AppResult<Kategori> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.categories.create(&payload.nama).await
    }

    /// Zero rows affected reports a generic bad request, not a 404.
    pub async fn update_kategori(&self, id: i32, payload: KategoriPayload) -> AppResult<()> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let affected = self.repository.categories.update(id, &payload.nama).await?;
        if affected == 0 {
            return Err(AppError::BadRequest(format!(
                "kategori dengan id {} tidak ditemukan",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_kategori(&self, id: i32) -> AppResult<()> {
        let affected = self.repository.categories.delete(id).await?;
        if affected == 0 {
            return Err(AppError::BadRequest(
                "gagal hapus data atau data tidak ditemukan".to_string(),
            ));
        }
        Ok(())
    }

    // --- buku ---

    pub async fn list_buku(&self) -> AppResult<Vec<BukuWithKategori>> {
        self.repository.books.list_with_category().await
    }

    pub async fn get_buku(&self, id: i32) -> AppResult<BukuWithKategori> {
        self.repository.books.get_with_category(id).await
    }

    /// Create a buku. The kategori is checked before any write; the foreign
    /// key remains the final authority.
    pub async fn create_buku(&self, payload: BukuPayload) -> AppResult<Buku> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !self.repository.categories.exists(payload.kategori_id).await? {
            return Err(AppError::Validation(format!(
                "kategori id {} tidak ditemukan.",
                payload.kategori_id
            )));
        }

        self.repository.books.create(&payload).await
    }

    pub async fn update_buku(&self, id: i32, payload: BukuPayload) -> AppResult<()> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !self.repository.categories.exists(payload.kategori_id).await? {
            return Err(AppError::Validation(format!(
                "kategori id {} tidak ditemukan.",
                payload.kategori_id
            )));
        }

        let affected = self.repository.books.update(id, &payload).await?;
        if affected == 0 {
            return Err(AppError::BadRequest(format!(
                "buku dengan id {} tidak ditemukan",
                id
            )));
        }
        Ok(())
    }

    pub async fn delete_buku(&self, id: i32) -> AppResult<()> {
        let affected = self.repository.books.delete(id).await?;
        if affected == 0 {
            return Err(AppError::BadRequest(
                "gagal hapus data atau data tidak ditemukan".to_string(),
            ));
        }
        Ok(())
    }
}

//! Loan record service
//!
//! Loan creation is best-effort validation plus constraint-layer authority:
//! the book-existence check and the insert are not atomic, and a race between
//! them is acceptable because the foreign key rejects the insert anyway.

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreatePeminjaman, Peminjaman, PeminjamanDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a loan for the calling user on the given book.
    ///
    /// No ordering between tanggal_pinjam and tanggal_kembali is enforced;
    /// a return date before the borrow date is accepted.
    pub async fn create(
        &self,
        user_id: i32,
        buku_id: i32,
        request: CreatePeminjaman,
    ) -> AppResult<Peminjaman> {
        if !self.repository.books.exists(buku_id).await? {
            return Err(AppError::Validation(format!(
                "buku id {} tidak ditemukan.",
                buku_id
            )));
        }

        self.repository
            .loans
            .create(user_id, buku_id, request.tanggal_pinjam, request.tanggal_kembali)
            .await
    }

    /// Every loan in the system with borrower and book details
    pub async fn list(&self) -> AppResult<Vec<PeminjamanDetails>> {
        self.repository.loans.list_details().await
    }

    /// A single loan with borrower and book details
    pub async fn get_by_id(&self, id: i32) -> AppResult<PeminjamanDetails> {
        self.repository.loans.get_details_by_id(id).await
    }
}

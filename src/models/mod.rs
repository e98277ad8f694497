//! Data models for the Perpus server
//!
//! Plain data structures only; persistence lives in the repository layer.

pub mod book;
pub mod category;
pub mod loan;
pub mod user;

pub use book::{Buku, BukuWithKategori};
pub use category::{Kategori, KategoriWithBuku};
pub use loan::{Peminjaman, PeminjamanDetails};
pub use user::{Profile, Role, User, UserClaims};

//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{Profile, Role, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user dengan id {} tidak ditemukan", id)))
    }

    /// Get user by email, if any
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Insert a new user. `password` must already be hashed.
    ///
    /// The unique index on email is translated into a conflict here.
    pub async fn create(
        &self,
        nama: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (nama, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nama)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(e, "email sudah terdaftar", "gagal tambah data")
        })
    }

    /// Upsert the user's profile: create on first edit, overwrite after.
    pub async fn upsert_profile(&self, user_id: i32, bio: &str, alamat: &str) -> AppResult<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, bio, alamat)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id)
            DO UPDATE SET bio = EXCLUDED.bio, alamat = EXCLUDED.alamat, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(bio)
        .bind(alamat)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }
}

//! Authentication, registration and profile service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{
        LoginRequest, Profile, RegisterRequest, Role, UpdateProfileRequest, User, UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user with the default role.
    ///
    /// Every failure on this route, including a duplicate email, reports as
    /// unprocessable entity.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request
            .validate()
            .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

        let password_hash = self.hash_password(&request.password)?;

        match self
            .repository
            .users
            .create(&request.nama, &request.email, &password_hash, Role::User)
            .await
        {
            Ok(user) => Ok(user),
            Err(AppError::Conflict(msg)) => Err(AppError::UnprocessableEntity(msg)),
            Err(e) => Err(e),
        }
    }

    /// Authenticate by email and password, issuing a 7-day bearer token.
    pub async fn login(&self, request: LoginRequest) -> AppResult<String> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(format!("login validasi: {}", e)))?;

        let user = self
            .repository
            .users
            .get_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::BadRequest("login gagal".to_string()))?;

        if !self.verify_password(&user, &request.password)? {
            return Err(AppError::BadRequest("login gagal".to_string()));
        }

        self.create_token(&user)
    }

    /// OTP confirmation: the submitted email must match the caller's own.
    pub async fn confirm_otp(&self, claims: &UserClaims, email: &str) -> AppResult<()> {
        let user = self.repository.users.get_by_id(claims.user_id).await?;
        if user.email == email {
            Ok(())
        } else {
            Err(AppError::BadRequest("email is not verified".to_string()))
        }
    }

    /// The caller's own user record
    pub async fn user_info(&self, user_id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(user_id).await
    }

    /// Upsert the caller's profile; only the owner ever reaches this.
    pub async fn update_profile(
        &self,
        user_id: i32,
        request: UpdateProfileRequest,
    ) -> AppResult<Profile> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository
            .users
            .upsert_profile(user_id, &request.bio, &request.alamat)
            .await
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&user.password)
            .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    fn create_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + self.config.jwt_expiration_days * 24 * 3600;

        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

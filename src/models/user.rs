//! User and profile models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Account role. `petugas` (staff) manages the catalog, `user` borrows books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Petugas,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Petugas => "petugas",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "petugas" => Ok(Role::Petugas),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

// SQLx conversion for Role (stored as text)
impl sqlx::Type<Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Role {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for Role {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Full user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub nama: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_me_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Borrower identity attached to loan records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserPublic {
    pub id: i32,
    pub nama: String,
    pub email: String,
    pub role: Role,
}

/// User profile, zero-or-one per user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Profile {
    pub id: i32,
    pub user_id: i32,
    pub bio: String,
    pub alamat: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "nama is required"))]
    pub nama: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// OTP confirmation request: an email-match check against the caller,
/// not a one-time-code protocol.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OtpRequest {
    pub email: String,
}

/// Profile upsert request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "bio is required"))]
    pub bio: String,
    #[validate(length(min = 1, message = "alamat is required"))]
    pub alamat: String,
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Require the borrower role (loan routes)
    pub fn require_user(&self) -> Result<(), AppError> {
        if self.role == Role::User {
            Ok(())
        } else {
            Err(AppError::Authorization("anda tidak punya akses".to_string()))
        }
    }

    /// Require the staff role (catalog routes)
    pub fn require_petugas(&self) -> Result<(), AppError> {
        if self.role == Role::Petugas {
            Ok(())
        } else {
            Err(AppError::Authorization("anda tidak punya akses".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("PETUGAS".parse::<Role>().unwrap(), Role::Petugas);
        assert_eq!(Role::Petugas.as_str(), "petugas");
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn token_round_trips() {
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: "riski@gmail.com".to_string(),
            user_id: 1,
            role: Role::User,
            exp: now + 7 * 24 * 3600,
            iat: now,
        };

        let token = claims.create_token("test-secret").unwrap();
        let parsed = UserClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(parsed.user_id, 1);
        assert_eq!(parsed.role, Role::User);
        assert_eq!(parsed.sub, "riski@gmail.com");
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: "riski@gmail.com".to_string(),
            user_id: 1,
            role: Role::User,
            exp: now + 3600,
            iat: now,
        };

        let token = claims.create_token("test-secret").unwrap();
        assert!(UserClaims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn role_gates() {
        let now = Utc::now().timestamp();
        let mut claims = UserClaims {
            sub: "riski@gmail.com".to_string(),
            user_id: 1,
            role: Role::User,
            exp: now + 3600,
            iat: now,
        };

        assert!(claims.require_user().is_ok());
        assert!(claims.require_petugas().is_err());

        claims.role = Role::Petugas;
        assert!(claims.require_petugas().is_ok());
        assert!(claims.require_user().is_err());
    }
}

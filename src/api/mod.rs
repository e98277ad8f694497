//! API handlers for the Perpus REST endpoints

pub mod auth;
pub mod books;
pub mod categories;
pub mod health;
pub mod loans;
pub mod openapi;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Response envelope for mutations: `{message}`
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response envelope for reads: `{message, data}`
#[derive(Serialize, ToSchema)]
#[aliases(
    UserDataResponse = DataResponse<crate::models::user::User>,
    KategoriListResponse = DataResponse<Vec<crate::models::category::KategoriWithBuku>>,
    KategoriDataResponse = DataResponse<crate::models::category::KategoriWithBuku>,
    BukuListResponse = DataResponse<Vec<crate::models::book::BukuWithKategori>>,
    BukuDataResponse = DataResponse<crate::models::book::BukuWithKategori>,
    PeminjamanListResponse = DataResponse<Vec<crate::models::loan::PeminjamanDetails>>,
    PeminjamanDataResponse = DataResponse<crate::models::loan::PeminjamanDetails>
)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Standard read envelope with the stock success message
    pub fn shown(data: T) -> Self {
        Self {
            message: "data berhasil ditampilkan".to_string(),
            data,
        }
    }
}

/// Json extractor that renders rejections in the `{message}` envelope.
///
/// Axum's stock `Json` answers a malformed body (bad JSON, bad date) with a
/// plain-text response; every error on this API is a JSON envelope.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication("Invalid authorization header format".to_string()));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::loan::CreatePeminjaman;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_date_maps_to_validation() {
        let req = json_request(r#"{"tanggal_pinjam":"2023-13-99","tanggal_kembali":"2023-03-25"}"#);
        let err = JsonBody::<CreatePeminjaman>::from_request(req, &())
            .await
            .err()
            .expect("malformed date must be rejected");

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn well_formed_body_passes_through() {
        let req = json_request(r#"{"tanggal_pinjam":"2023-02-25","tanggal_kembali":"2023-03-25"}"#);
        let JsonBody(parsed) = JsonBody::<CreatePeminjaman>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(parsed.tanggal_pinjam.to_string(), "2023-02-25");
    }
}

//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, categories, health, loans};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Perpus API",
        version = "1.0.0",
        description = "Library Management Record Service REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::otp_confirmation,
        auth::user_info,
        auth::update_profile,
        // Kategori
        categories::list_kategori,
        categories::get_kategori,
        categories::create_kategori,
        categories::update_kategori,
        categories::delete_kategori,
        // Buku
        books::list_buku,
        books::get_buku,
        books::create_buku,
        books::update_buku,
        books::delete_buku,
        // Peminjaman
        loans::create_peminjaman,
        loans::list_peminjaman,
        loans::get_peminjaman,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::RegisterRequest,
            crate::models::user::LoginRequest,
            crate::models::user::OtpRequest,
            crate::models::user::UpdateProfileRequest,
            crate::models::user::User,
            crate::models::user::UserPublic,
            crate::models::user::Profile,
            crate::models::user::Role,
            auth::LoginResponse,
            // Kategori
            crate::models::category::Kategori,
            crate::models::category::KategoriWithBuku,
            crate::models::category::KategoriPayload,
            // Buku
            crate::models::book::Buku,
            crate::models::book::BukuWithKategori,
            crate::models::book::BukuPayload,
            // Peminjaman
            crate::models::loan::Peminjaman,
            crate::models::loan::PeminjamanDetails,
            crate::models::loan::CreatePeminjaman,
            // Envelopes
            crate::api::MessageResponse,
            crate::api::UserDataResponse,
            crate::api::KategoriListResponse,
            crate::api::KategoriDataResponse,
            crate::api::BukuListResponse,
            crate::api::BukuDataResponse,
            crate::api::PeminjamanListResponse,
            crate::api::PeminjamanDataResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication and profile endpoints"),
        (name = "kategori", description = "Category management"),
        (name = "buku", description = "Book management"),
        (name = "peminjaman", description = "Loan records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

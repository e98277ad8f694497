//! Perpus Server - Library Management Record Service
//!
//! A Rust REST API server for library borrowing records.

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use perpus_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("perpus_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Perpus Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Auth
        .route("/register", post(api::auth::register))
        .route("/login", post(api::auth::login))
        .route("/otp-confirmation", post(api::auth::otp_confirmation))
        .route("/user-info", get(api::auth::user_info))
        .route("/profile", post(api::auth::update_profile))
        // Kategori (staff only)
        .route("/kategori", get(api::categories::list_kategori))
        .route("/kategori", post(api::categories::create_kategori))
        .route("/kategori/:id", get(api::categories::get_kategori))
        .route("/kategori/:id", put(api::categories::update_kategori))
        .route("/kategori/:id", delete(api::categories::delete_kategori))
        // Buku (staff only)
        .route("/buku", get(api::books::list_buku))
        .route("/buku", post(api::books::create_buku))
        .route("/buku/:id", get(api::books::get_buku))
        .route("/buku/:id", put(api::books::update_buku))
        .route("/buku/:id", delete(api::books::delete_buku))
        // Peminjaman (borrower role)
        .route("/buku/:id/peminjaman", post(api::loans::create_peminjaman))
        .route("/peminjaman", get(api::loans::list_peminjaman))
        .route("/peminjaman/:id", get(api::loans::get_peminjaman))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .route("/", get(|| async { Json(json!({ "hello": "world" })) }))
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

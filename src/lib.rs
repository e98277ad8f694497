//! Perpus Library Management Record Service
//!
//! A Rust REST JSON API for tracking books, categories, borrowing records
//! and user profiles behind a bearer-token authenticated HTTP API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

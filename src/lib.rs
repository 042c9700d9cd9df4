use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

/// Build the full application router. Kept separate from `main` so tests can
/// drive the service without binding a socket.
pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route(
            "/",
            get(handlers::pages::login_page).post(handlers::auth::login),
        )
        .route(
            "/register",
            get(handlers::pages::register_page).post(handlers::auth::register),
        )
        .route("/logout", get(handlers::auth::logout))
        .route("/dailyecho", get(handlers::pages::app_shell));

    // JSON surface. Session-gated handlers answer a benign neutral value when
    // no session is presented, never an HTTP error.
    let api = Router::new()
        .route("/add", post(handlers::entries::save_entry))
        .route("/api/add-to-today", post(handlers::entries::append_to_today))
        .route("/api/entry-by-date", get(handlers::entries::entry_by_date))
        .route("/api/today-entry", get(handlers::entries::today_entry))
        .route("/api/calendar", get(handlers::insights::calendar))
        .route("/api/search", get(handlers::insights::search))
        .route("/api/mood-data", get(handlers::insights::mood_trend))
        .route("/api/graph", get(handlers::insights::recent_graph));

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(pages)
        .merge(api)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

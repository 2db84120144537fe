pub mod health;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/search") }))
        .route("/health", get(health::health_handler))
        // Server-rendered pages
        .route("/search", get(search::handle_search_page))
        .route(
            "/signin",
            get(auth::handle_sign_in_page).post(auth::handle_sign_in_form),
        )
        .route("/signout", post(auth::handle_sign_out_form))
        // Search API
        .route("/api/v1/search", get(search::handle_search_api))
        .route("/api/v1/backend/ping", get(health::backend_ping_handler))
        // Mock auth
        .route("/api/v1/auth/signin", post(auth::handle_sign_in))
        .route("/api/v1/auth/signout", post(auth::handle_sign_out))
        .route("/api/v1/auth/me", get(auth::handle_me))
        .with_state(state)
}

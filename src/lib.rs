//! Backend for a restaurant menu widget.
//!
//! Keeps an in-memory list of menu item names, produces canned marketing
//! copy for an item from a keyword table, and caps how often each client
//! may ask for that copy with a sliding-window rate limiter.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod menu;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;
pub mod validate;

use handlers::{
    add_menu_item_handler, generate_handler, health_handler, list_menu_items_handler,
    metrics_handler,
};
use state::AppState;

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/menu-items",
            get(list_menu_items_handler).post(add_menu_item_handler),
        )
        .route("/generate-item-details", post(generate_handler))
        .route("/metrics", get(metrics_handler))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

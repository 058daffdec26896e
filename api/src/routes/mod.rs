//! HTTP route entry point.
//!
//! Route groups:
//! - `/`, `/search/`, `/course/{course_id}/...` → catalogue and review listing
//! - `/course/{course_id}/add/`, `/course/{course_id}/cancel` → review lifecycle
//! - `/admin` → maintenance placeholders
//! - `/health` → liveness probe

use crate::routes::{
    admin::admin_routes, courses::courses_routes, health::health_routes, reviews::reviews_routes,
};
use axum::Router;
use util::state::AppState;

pub mod admin;
pub mod courses;
pub mod health;
pub mod reviews;

/// Builds the complete application router for all HTTP endpoints.
///
/// Paths keep their trailing slashes exactly as published; `/course/1` and
/// `/course/1/` are different routes.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/admin", admin_routes())
        .merge(courses_routes())
        .merge(reviews_routes())
        .with_state(app_state)
}

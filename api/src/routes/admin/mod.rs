use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

use get::import_demo;

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/import_demo", get(import_demo))
}

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use get::get_review_form;
use post::{add_review, cancel_review};

pub fn reviews_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/course/{course_id}/add/",
            get(get_review_form).post(add_review),
        )
        .route("/course/{course_id}/cancel", post(cancel_review))
}

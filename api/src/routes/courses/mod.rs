use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod get;

use get::{get_course, get_course_page, list_courses, search_courses};

pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/search/", get(search_courses))
        .route("/course/{course_id}/", get(get_course))
        .route("/course/{course_id}/page/{page}/", get(get_course_page))
}

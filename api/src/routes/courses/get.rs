//! Catalogue handlers.
//!
//! Lists and searches courses, and shows one course with a page of its active
//! reviews.

use crate::response::{ApiResponse, error_response};
use crate::routes::courses::common::{ReviewListQuery, SearchQuery, parse_nonzero};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use services::course::{Course, CourseSearch, CourseService};
use services::review::ReviewService;
use util::state::AppState;

#[derive(Serialize)]
pub struct SearchResponse {
    pub courses: Vec<Course>,
    /// The filters that were applied, after trimming, so a client can refill its form.
    pub filters: CourseSearch,
}

/// GET /
///
/// Lists every course ordered by code.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "code": "ENG201",
///       "title": "Fundamentals of Management Engineering",
///       "area": "Management Engineering",
///       "year": 2,
///       "semester": "Spring",
///       "schedule": "Tue2-3",
///       "credits": 2.0,
///       "syllabus_url": null
///     }
///   ],
///   "message": "Courses retrieved successfully"
/// }
/// ```
/// - `500 INTERNAL SERVER ERROR` on a database failure
pub async fn list_courses(State(app_state): State<AppState>) -> impl IntoResponse {
    match CourseService::list_all(app_state.db()).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(courses, "Courses retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /search/
///
/// Filters the catalogue. All parameters are optional and combined with AND.
///
/// ### Query Parameters
/// - `code`, `title`, `schedule`: substring match
/// - `area`, `semester`: exact match
/// - `year`: exact match; ignored when it is not an integer
///
/// Blank parameters are ignored. Results are ordered by code and not paginated.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "courses": [ { "id": 4, "code": "STAT220", "...": "..." } ],
///     "filters": {
///       "code": null,
///       "title": null,
///       "area": "Foundations",
///       "year": 2,
///       "semester": null,
///       "schedule": null
///     }
///   },
///   "message": "Found 1 course(s)"
/// }
/// ```
pub async fn search_courses(
    State(app_state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let filters = CourseSearch::from(query);

    match CourseService::search(app_state.db(), &filters).await {
        Ok(courses) => {
            let message = format!("Found {} course(s)", courses.len());
            (
                StatusCode::OK,
                Json(ApiResponse::success(SearchResponse { courses, filters }, message)),
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

/// GET /course/{course_id}/
///
/// First page of a course's active reviews. See [`get_course_page`].
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Query(query): Query<ReviewListQuery>,
) -> impl IntoResponse {
    course_page(&app_state, course_id, 1, query).await
}

/// GET /course/{course_id}/page/{page}/
///
/// A course together with one page (50 reviews) of its active reviews, newest
/// first. Pages below 1 are treated as page 1; pages past the end are empty.
///
/// ### Query Parameters
/// - `min_recommend`: only reviews with `recommend >= min_recommend`. Ignored
///   when zero or not an integer.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "course": { "id": 1, "code": "SES101", "...": "..." },
///     "reviews": [
///       {
///         "id": 12,
///         "course_id": 1,
///         "user_id": "3bc51062973c458d",
///         "difficulty": 3,
///         "recommend": 4,
///         "attendance_required": true,
///         "assessment": "exam",
///         "comment": "Clear lectures.",
///         "state": "active",
///         "created_at": "2026-10-17T09:30:00Z",
///         "withdrawn_at": null
///       }
///     ],
///     "pagination": {
///       "page": 1, "per_page": 50, "total": 1, "pages": 1,
///       "has_prev": false, "has_next": false
///     },
///     "min_recommend": null
///   },
///   "message": "Course retrieved successfully"
/// }
/// ```
/// - `404 NOT FOUND` when the course does not exist
pub async fn get_course_page(
    State(app_state): State<AppState>,
    Path((course_id, page)): Path<(i64, i64)>,
    Query(query): Query<ReviewListQuery>,
) -> impl IntoResponse {
    let page = u64::try_from(page).unwrap_or(1);
    course_page(&app_state, course_id, page, query).await
}

async fn course_page(
    app_state: &AppState,
    course_id: i64,
    page: u64,
    query: ReviewListQuery,
) -> Response {
    let min_recommend = parse_nonzero(query.min_recommend.as_deref());

    match ReviewService::list_active(app_state.db(), course_id, page, min_recommend).await {
        Ok(page) => (
            StatusCode::OK,
            Json(ApiResponse::success(page, "Course retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

use crate::response::{ApiResponse, error_response};
use crate::routes::reviews::common::ReviewFormResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use services::course::CourseService;
use services::review::{ASSESSMENT_KINDS, RATING_MAX, RATING_MIN};
use util::state::AppState;

/// GET /course/{course_id}/add/
///
/// Describes the add-review form for a course: the course itself, the rating
/// bounds and the suggested assessment kinds.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "course": { "id": 1, "code": "SES101", "...": "..." },
///     "rating_min": 1,
///     "rating_max": 5,
///     "assessment_kinds": ["exam", "report", "both", "none"]
///   },
///   "message": "Review form ready"
/// }
/// ```
/// - `404 NOT FOUND` when the course does not exist
pub async fn get_review_form(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match CourseService::get(app_state.db(), course_id).await {
        Ok(course) => {
            let form = ReviewFormResponse {
                course,
                rating_min: RATING_MIN,
                rating_max: RATING_MAX,
                assessment_kinds: ASSESSMENT_KINDS.to_vec(),
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(form, "Review form ready")),
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

use crate::response::{ApiResponse, error_response};
use crate::routes::reviews::common::{CancelForm, ReviewForm};
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use services::review::{CreateReview, ReviewService};
use util::state::AppState;

/// POST /course/{course_id}/add/
///
/// Submits a review. The body is `application/x-www-form-urlencoded`.
///
/// ### Form Fields
/// - `name` (required): display name; the reviewer's identity is derived from it
/// - `difficulty`, `recommend` (required): integers 1-5
/// - `attendance`: `on` when attendance is required
/// - `assessment`: free-form tag, defaults to `none`
/// - `comment`: free text
///
/// ### Responses
/// - `201 CREATED` with the stored review
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 3,
///     "course_id": 1,
///     "user_id": "3bc51062973c458d",
///     "difficulty": 3,
///     "recommend": 4,
///     "attendance_required": false,
///     "assessment": "none",
///     "comment": "",
///     "state": "active",
///     "created_at": "2026-10-17T09:30:00Z",
///     "withdrawn_at": null
///   },
///   "message": "Review added"
/// }
/// ```
/// - `400 BAD REQUEST` when a field is missing or out of range
/// ```json
/// { "success": false, "data": null, "message": "Difficulty must be between 1 and 5" }
/// ```
/// - `404 NOT FOUND` when the course does not exist
/// - `409 CONFLICT` when the reviewer already has an active review on the course
pub async fn add_review(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Form(form): Form<ReviewForm>,
) -> impl IntoResponse {
    match ReviewService::add(app_state.db(), course_id, CreateReview::from(form)).await {
        Ok(review) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(review, "Review added")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /course/{course_id}/cancel
///
/// Withdraws the caller's active review. The body carries the `name` field.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Review cancelled" }
/// ```
/// - `400 BAD REQUEST` when `name` is missing or blank
/// - `404 NOT FOUND` when the course does not exist, or when there is no
///   active review to cancel (`"No active review found"`)
pub async fn cancel_review(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    Form(form): Form<CancelForm>,
) -> impl IntoResponse {
    let name = form.name.unwrap_or_default();

    match ReviewService::cancel(app_state.db(), course_id, &name).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Review cancelled")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::service::AppError;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// Every endpoint answers with the same shape:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `success` is a boolean indicating operation status.
/// - `message` is the human-readable outcome, e.g. "Review added".
///
/// ## Example (error):
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Course 7 not found"
/// }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// HTTP status for each service failure.
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::CourseNotFound(_) => StatusCode::NOT_FOUND,
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::DuplicateReview => StatusCode::CONFLICT,
        AppError::NoActiveReview => StatusCode::NOT_FOUND,
        AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turns a service failure into an error envelope.
///
/// Store failures are logged and replaced by a generic message; every other
/// error carries its own user-facing text.
pub fn error_response(err: AppError) -> Response {
    let status = status_for(&err);

    let message = match err {
        AppError::Database(db_err) => {
            tracing::error!(error = %db_err, "Database failure while handling request");
            "Internal server error".to_string()
        }
        other => other.to_string(),
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

use crate::response::ApiResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};

/// GET /admin/import_demo
///
/// Placeholder for a syllabus import. Nothing is imported and nothing is written.
///
/// ### Response
/// - `501 NOT IMPLEMENTED`
///
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Import placeholder: syllabus import is not implemented"
/// }
/// ```
pub async fn import_demo() -> impl IntoResponse {
    tracing::warn!("Syllabus import requested but not implemented");
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(ApiResponse::<()>::error(
            "Import placeholder: syllabus import is not implemented",
        )),
    )
}

//! # Review form DTOs
//!
//! Bodies of the `application/x-www-form-urlencoded` submissions under
//! `/course/{course_id}/`. Every field is optional at this layer; presence and
//! range are checked by the review service.

use serde::{Deserialize, Serialize};
use services::course::Course;
use services::review::CreateReview;

#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    pub name: Option<String>,
    pub difficulty: Option<String>,
    pub recommend: Option<String>,
    /// Checkbox; only the value `on` counts as checked.
    pub attendance: Option<String>,
    pub assessment: Option<String>,
    pub comment: Option<String>,
}

fn parse_rating(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.trim().parse::<i32>().ok())
}

impl From<ReviewForm> for CreateReview {
    fn from(form: ReviewForm) -> Self {
        CreateReview {
            name: form.name.unwrap_or_default(),
            difficulty: parse_rating(form.difficulty.as_deref()),
            recommend: parse_rating(form.recommend.as_deref()),
            attendance_required: form.attendance.as_deref() == Some("on"),
            assessment: form.assessment,
            comment: form.comment.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CancelForm {
    pub name: Option<String>,
}

/// What a client needs to render the add-review form.
#[derive(Debug, Serialize)]
pub struct ReviewFormResponse {
    pub course: Course,
    pub rating_min: i32,
    pub rating_max: i32,
    pub assessment_kinds: Vec<&'static str>,
}

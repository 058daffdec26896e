//! Query-string DTOs for the catalogue routes.
//!
//! Every field arrives as an optional string so that malformed numbers are
//! ignored instead of rejecting the whole request.

use serde::Deserialize;
use services::course::CourseSearch;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub code: Option<String>,
    pub title: Option<String>,
    pub area: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
    pub schedule: Option<String>,
}

/// Parses an optional integer parameter; blank, zero and unparsable values count as absent.
pub fn parse_nonzero(value: Option<&str>) -> Option<i32> {
    value
        .and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|v| *v != 0)
}

impl From<SearchQuery> for CourseSearch {
    fn from(query: SearchQuery) -> Self {
        CourseSearch {
            year: parse_nonzero(query.year.as_deref()),
            code: query.code,
            title: query.title,
            area: query.area,
            semester: query.semester,
            schedule: query.schedule,
        }
        .normalized()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewListQuery {
    pub min_recommend: Option<String>,
}

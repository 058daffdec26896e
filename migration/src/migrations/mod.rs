pub mod m202610170001_create_courses;
pub mod m202610170002_create_reviews;
pub mod m202610170003_create_review_history;

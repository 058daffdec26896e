pub mod course;
pub mod review;
pub mod review_history;

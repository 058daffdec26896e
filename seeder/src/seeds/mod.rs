pub mod course;
pub mod review;

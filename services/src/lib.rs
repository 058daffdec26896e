pub mod course;
pub mod identity;
pub mod pagination;
pub mod review;
pub mod service;

pub mod app;

pub use app::{make_test_app, read_json_body};

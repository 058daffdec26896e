use api::{middleware::log_request, routes::routes};
use axum::{Router, middleware::from_fn, response::Response};
use db::test_utils::setup_test_db;
use serde_json::Value;
use util::state::AppState;

/// Full router over a fresh in-memory database, plus the state for seeding.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db);

    let router = routes(app_state.clone()).layer(from_fn(log_request));

    (router, app_state)
}

pub async fn read_json_body(res: Response) -> Value {
    let body_bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice::<Value>(&body_bytes).unwrap()
}

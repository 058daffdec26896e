#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/health")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
        assert_eq!(json["message"], "Health check passed");
    }
}

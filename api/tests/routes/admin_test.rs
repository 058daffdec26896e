#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::course::Entity as CourseEntity;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use tower::ServiceExt;

    #[tokio::test]
    async fn import_demo_is_not_implemented_and_writes_nothing() {
        let (app, app_state) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/admin/import_demo")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

        let json = read_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("not implemented"));

        let courses = CourseEntity::find().count(app_state.db()).await.unwrap();
        assert_eq!(courses, 0);
    }
}

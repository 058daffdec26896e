#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::{
        course::Model as CourseModel, review::Entity as ReviewEntity,
        review_history::Entity as HistoryEntity,
    };
    use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn setup_course(db: &DatabaseConnection) -> CourseModel {
        CourseModel::create(
            db,
            "SES101",
            "Introduction to Socio-Economics",
            "Foundations",
            1,
            "Spring",
            "Mon1",
            2.0,
            None,
        )
        .await
        .unwrap()
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        (status, read_json_body(response).await)
    }

    async fn row_counts(db: &DatabaseConnection) -> (u64, u64) {
        (
            ReviewEntity::find().count(db).await.unwrap(),
            HistoryEntity::find().count(db).await.unwrap(),
        )
    }

    // ─────────────────────────────────────────────────────────────
    // GET /course/{course_id}/add/
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn add_form_describes_the_course() {
        let (app, app_state) = make_test_app().await;
        let course = setup_course(app_state.db()).await;

        let req = Request::builder()
            .method("GET")
            .uri(format!("/course/{}/add/", course.id))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json_body(response).await;
        assert_eq!(json["data"]["course"]["code"], "SES101");
        assert_eq!(json["data"]["rating_min"], 1);
        assert_eq!(json["data"]["rating_max"], 5);
        assert_eq!(json["data"]["assessment_kinds"][3], "none");
    }

    #[tokio::test]
    async fn add_form_for_unknown_course_is_404() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/course/42/add/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ─────────────────────────────────────────────────────────────
    // POST /course/{course_id}/add/
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn add_then_duplicate() {
        let (app, app_state) = make_test_app().await;
        let course = setup_course(app_state.db()).await;
        let uri = format!("/course/{}/add/", course.id);

        let (status, json) = post_form(app.clone(), &uri, "name=Alice&difficulty=3&recommend=4").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Review added");
        assert_eq!(json["data"]["recommend"], 4);
        assert_eq!(json["data"]["state"], "active");
        assert_eq!(json["data"]["user_id"].as_str().unwrap().len(), 16);

        let (status, json) = post_form(app, &uri, "name=Alice&difficulty=1&recommend=1").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "You already have an active review for this course. Cancel it first."
        );

        assert_eq!(row_counts(app_state.db()).await, (1, 0));
    }

    #[tokio::test]
    async fn optional_fields_are_normalized() {
        let (app, app_state) = make_test_app().await;
        let course = setup_course(app_state.db()).await;
        let uri = format!("/course/{}/add/", course.id);

        let body = "name=Bob&difficulty=2&recommend=5&attendance=on&assessment=&comment=%20%20great%20";
        let (status, json) = post_form(app, &uri, body).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["attendance_required"], true);
        assert_eq!(json["data"]["assessment"], "none");
        assert_eq!(json["data"]["comment"], "great");
    }

    #[tokio::test]
    async fn invalid_submissions_are_rejected_without_writes() {
        let (app, app_state) = make_test_app().await;
        let course = setup_course(app_state.db()).await;
        let uri = format!("/course/{}/add/", course.id);

        let cases = [
            ("name=Alice&difficulty=0&recommend=3", "Difficulty must be between 1 and 5"),
            ("name=Alice&difficulty=3&recommend=6", "Recommendation must be between 1 and 5"),
            ("name=Alice&difficulty=3", "Recommendation is required"),
            ("name=Alice&difficulty=abc&recommend=3", "Difficulty is required"),
            ("name=%20&difficulty=3&recommend=3", "Name is required"),
            ("difficulty=3&recommend=3", "Name is required"),
        ];

        for (body, message) in cases {
            let (status, json) = post_form(app.clone(), &uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["message"], message, "{body}");
        }

        assert_eq!(row_counts(app_state.db()).await, (0, 0));
    }

    #[tokio::test]
    async fn add_to_unknown_course_is_404() {
        let (app, _) = make_test_app().await;

        let (status, json) =
            post_form(app, "/course/7/add/", "name=Alice&difficulty=3&recommend=4").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Course 7 not found");
    }

    // ─────────────────────────────────────────────────────────────
    // POST /course/{course_id}/cancel
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn cancel_without_active_review_is_404() {
        let (app, app_state) = make_test_app().await;
        let course = setup_course(app_state.db()).await;

        let (status, json) =
            post_form(app, &format!("/course/{}/cancel", course.id), "name=Alice").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "No active review found");
        assert_eq!(row_counts(app_state.db()).await, (0, 0));
    }

    #[tokio::test]
    async fn cancel_requires_a_name() {
        let (app, app_state) = make_test_app().await;
        let course = setup_course(app_state.db()).await;

        let (status, json) = post_form(app, &format!("/course/{}/cancel", course.id), "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Name is required");
    }

    #[tokio::test]
    async fn add_cancel_add_cycle() {
        let (app, app_state) = make_test_app().await;
        let course = setup_course(app_state.db()).await;
        let add_uri = format!("/course/{}/add/", course.id);
        let cancel_uri = format!("/course/{}/cancel", course.id);

        let (status, _) =
            post_form(app.clone(), &add_uri, "name=Alice&difficulty=3&recommend=4").await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, json) = post_form(app.clone(), &cancel_uri, "name=Alice").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Review cancelled");

        let req = Request::builder()
            .method("GET")
            .uri(format!("/course/{}/", course.id))
            .body(Body::empty())
            .unwrap();
        let json = read_json_body(app.clone().oneshot(req).await.unwrap()).await;
        assert_eq!(json["data"]["pagination"]["total"], 0);

        let (status, json) =
            post_form(app, &add_uri, "name=Alice&difficulty=5&recommend=2").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["recommend"], 2);

        assert_eq!(row_counts(app_state.db()).await, (1, 1));
    }
}

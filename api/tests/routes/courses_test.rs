#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, read_json_body};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use db::models::{
        course::Model as CourseModel,
        review::{Model as ReviewModel, ReviewContent},
    };
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;

    struct TestData {
        ses101: CourseModel,
        stat220: CourseModel,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let ses101 = CourseModel::create(
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
        .unwrap();

        CourseModel::create(
            db,
            "URP301",
            "Urban Planning Theory",
            "Urban Planning",
            3,
            "Fall",
            "Wed4",
            2.0,
            None,
        )
        .await
        .unwrap();

        let stat220 = CourseModel::create(
            db,
            "STAT220",
            "Introduction to Statistics",
            "Foundations",
            2,
            "Spring",
            "Thu3",
            2.0,
            None,
        )
        .await
        .unwrap();

        CourseModel::create(
            db,
            "ENG201",
            "Fundamentals of Management Engineering",
            "Management Engineering",
            2,
            "Spring",
            "Tue2-3",
            2.0,
            None,
        )
        .await
        .unwrap();

        TestData { ses101, stat220 }
    }

    async fn seed_reviews(db: &DatabaseConnection, course_id: i64, count: i64) {
        let start = Utc::now();
        for i in 0..count {
            let content = ReviewContent {
                difficulty: 2,
                recommend: (i % 5 + 1) as i32,
                attendance_required: false,
                assessment: "report".into(),
                comment: format!("review {i}"),
            };
            ReviewModel::insert_active(
                db,
                course_id,
                &format!("{i:016x}"),
                content,
                start + Duration::seconds(i),
            )
            .await
            .unwrap();
        }
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        (status, read_json_body(response).await)
    }

    fn codes(courses: &Value) -> Vec<String> {
        courses
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["code"].as_str().unwrap().to_string())
            .collect()
    }

    // ─────────────────────────────────────────────────────────────
    // GET /
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn index_lists_courses_by_code() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let (status, json) = get(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(codes(&json["data"]), ["ENG201", "SES101", "STAT220", "URP301"]);
    }

    // ─────────────────────────────────────────────────────────────
    // GET /search/
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn search_combines_filters_and_echoes_them() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let (status, json) = get(app, "/search/?area=Foundations&year=2&code=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(codes(&json["data"]["courses"]), ["STAT220"]);

        let filters = &json["data"]["filters"];
        assert_eq!(filters["area"], "Foundations");
        assert_eq!(filters["year"], 2);
        assert_eq!(filters["code"], Value::Null);
    }

    #[tokio::test]
    async fn search_ignores_unparsable_year() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let (status, json) = get(app, "/search/?year=second").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["courses"].as_array().unwrap().len(), 4);
        assert_eq!(json["data"]["filters"]["year"], Value::Null);
    }

    #[tokio::test]
    async fn search_matches_substrings() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let (_, json) = get(app.clone(), "/search/?title=Introduction").await;
        assert_eq!(codes(&json["data"]["courses"]), ["SES101", "STAT220"]);

        let (_, json) = get(app, "/search/?schedule=Wed&semester=Fall").await;
        assert_eq!(codes(&json["data"]["courses"]), ["URP301"]);
    }

    // ─────────────────────────────────────────────────────────────
    // GET /course/{course_id}/ and /course/{course_id}/page/{page}/
    // ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn course_without_reviews() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (status, json) = get(app, &format!("/course/{}/", data.ses101.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["course"]["code"], "SES101");
        assert_eq!(json["data"]["reviews"].as_array().unwrap().len(), 0);
        assert_eq!(json["data"]["pagination"]["total"], 0);
        assert_eq!(json["data"]["pagination"]["pages"], 0);
        assert_eq!(json["data"]["pagination"]["has_next"], false);
    }

    #[tokio::test]
    async fn unknown_course_is_404() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let (status, json) = get(app, "/course/999/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Course 999 not found");
    }

    #[tokio::test]
    async fn reviews_are_paginated_newest_first() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        seed_reviews(app_state.db(), data.stat220.id, 60).await;

        let (status, json) = get(app.clone(), &format!("/course/{}/", data.stat220.id)).await;
        assert_eq!(status, StatusCode::OK);
        let reviews = json["data"]["reviews"].as_array().unwrap();
        assert_eq!(reviews.len(), 50);
        assert_eq!(reviews[0]["comment"], "review 59");
        assert_eq!(json["data"]["pagination"]["pages"], 2);
        assert_eq!(json["data"]["pagination"]["has_prev"], false);
        assert_eq!(json["data"]["pagination"]["has_next"], true);

        let (_, json) = get(app.clone(), &format!("/course/{}/page/2/", data.stat220.id)).await;
        let reviews = json["data"]["reviews"].as_array().unwrap();
        assert_eq!(reviews.len(), 10);
        assert_eq!(reviews[9]["comment"], "review 0");
        assert_eq!(json["data"]["pagination"]["page"], 2);
        assert_eq!(json["data"]["pagination"]["has_prev"], true);
        assert_eq!(json["data"]["pagination"]["has_next"], false);

        let (status, json) = get(app, &format!("/course/{}/page/0/", data.stat220.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["pagination"]["page"], 1);
    }

    #[tokio::test]
    async fn min_recommend_filters_reviews() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        // recommend cycles 1..=5, so 4 of 10 reviews have recommend >= 4
        seed_reviews(app_state.db(), data.ses101.id, 10).await;

        let uri = format!("/course/{}/?min_recommend=4", data.ses101.id);
        let (_, json) = get(app.clone(), &uri).await;
        assert_eq!(json["data"]["pagination"]["total"], 4);
        assert_eq!(json["data"]["min_recommend"], 4);
        for review in json["data"]["reviews"].as_array().unwrap() {
            assert!(review["recommend"].as_i64().unwrap() >= 4);
        }

        let uri = format!("/course/{}/?min_recommend=lots", data.ses101.id);
        let (status, json) = get(app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["pagination"]["total"], 10);
        assert_eq!(json["data"]["min_recommend"], Value::Null);
    }
}

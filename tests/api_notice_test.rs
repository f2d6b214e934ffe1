//! Integration tests for the notice proxy endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use serial_test::serial;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_json, test_app, test_app_with_upstream};

    // 학사
    const ACADEMIC: &str = "%ED%95%99%EC%82%AC";
    // 학생식단
    const STUDENT_MEALS: &str = "%ED%95%99%EC%83%9D%EC%8B%9D%EB%8B%A8";

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn it_returns_400_for_unknown_category() {
        let app = test_app().await;

        // 없는카테고리
        let response = app
            .oneshot(get(
                "/api/notice?category=%EC%97%86%EB%8A%94%EC%B9%B4%ED%85%8C%EA%B3%A0%EB%A6%AC",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"error": "유효하지 않은 카테고리입니다."}));
    }

    #[tokio::test]
    #[serial]
    async fn it_returns_400_for_missing_category() {
        let app = test_app().await;

        let response = app.oneshot(get("/api/notice")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn it_passes_json_records_through() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/academic-notices/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"title": "수강신청 안내", "noticeDate": "2025-03-04"}]"#)
            .create_async()
            .await;
        let app = test_app_with_upstream(&server.url()).await;

        let response = app
            .oneshot(get(&format!("/api/notice?category={}", ACADEMIC)))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body,
            json!([{"title": "수강신청 안내", "noticeDate": "2025-03-04"}])
        );
    }

    #[tokio::test]
    #[serial]
    async fn it_passes_json_objects_through() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/academic-notices/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content": [{"title": "a"}], "total": 1}"#)
            .create_async()
            .await;
        let app = test_app_with_upstream(&server.url()).await;

        let response = app
            .oneshot(get(&format!("/api/notice?category={}", ACADEMIC)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"content": [{"title": "a"}], "total": 1}));
    }

    #[tokio::test]
    #[serial]
    async fn it_converts_markdown_tables_to_records() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/student-meals/search")
            .with_status(200)
            .with_body(
                "| id | mealDate | menu |\n|----|----------|------|\n| 1 | 2025-03-04 | 김치찌개<br>쌀밥 |\n",
            )
            .create_async()
            .await;
        let app = test_app_with_upstream(&server.url()).await;

        let response = app
            .oneshot(get(&format!("/api/notice?category={}", STUDENT_MEALS)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body,
            json!([{"id": 1, "mealDate": "2025-03-04", "menu": "김치찌개\n쌀밥"}])
        );
    }

    #[tokio::test]
    #[serial]
    async fn it_passes_upstream_error_status_on() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/academic-notices/search")
            .with_status(404)
            .create_async()
            .await;
        let app = test_app_with_upstream(&server.url()).await;

        let response = app
            .oneshot(get(&format!("/api/notice?category={}", ACADEMIC)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"error": "서버 응답 오류"}));
    }

    #[tokio::test]
    #[serial]
    async fn it_returns_500_when_upstream_is_unreachable() {
        let app = test_app().await;

        let response = app
            .oneshot(get(&format!("/api/notice?category={}", ACADEMIC)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"error": "프록시 요청 실패"}));
    }

    #[tokio::test]
    #[serial]
    async fn it_returns_500_for_unrecognized_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/academic-notices/search")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;
        let app = test_app_with_upstream(&server.url()).await;

        let response = app
            .oneshot(get(&format!("/api/notice?category={}", ACADEMIC)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

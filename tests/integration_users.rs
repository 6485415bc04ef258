mod common;

use axum::http::StatusCode;
use common::{
    ADMIN_TOKEN, NEWCOMER_TOKEN, PROFESSOR_TOKEN, STUDENT_TOKEN, body_json, setup_test_app,
};

fn emails(body: &serde_json::Value) -> Vec<String> {
    let mut emails: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap().to_string())
        .collect();
    emails.sort();
    emails
}

#[tokio::test]
async fn test_student_lists_professors() {
    let app = setup_test_app();

    let response = app.get("/api/professors", Some(STUDENT_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(emails(&body), vec!["pat@uni.edu"]);
}

#[tokio::test]
async fn test_professor_cannot_list_professors() {
    let app = setup_test_app();

    let response = app.get("/api/professors", Some(PROFESSOR_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Access denied. Required role: student, but user has role: professor"
    );
}

#[tokio::test]
async fn test_professor_lists_students() {
    let app = setup_test_app();

    let response = app.get("/api/students", Some(PROFESSOR_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(emails(&body_json(response).await), vec!["sam@uni.edu"]);
}

#[tokio::test]
async fn test_student_cannot_list_students() {
    let app = setup_test_app();

    let response = app.get("/api/students", Some(STUDENT_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_is_not_a_student_or_professor() {
    let app = setup_test_app();

    assert_eq!(
        app.get("/api/professors", Some(ADMIN_TOKEN)).await.status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.get("/api/students", Some(ADMIN_TOKEN)).await.status(),
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_users_view_depends_on_role() {
    let app = setup_test_app();

    let as_student = body_json(app.get("/api/users", Some(STUDENT_TOKEN)).await).await;
    assert_eq!(emails(&as_student), vec!["pat@uni.edu"]);

    let as_professor = body_json(app.get("/api/users", Some(PROFESSOR_TOKEN)).await).await;
    assert_eq!(emails(&as_professor), vec!["sam@uni.edu"]);

    let as_admin = body_json(app.get("/api/users", Some(ADMIN_TOKEN)).await).await;
    assert_eq!(
        emails(&as_admin),
        vec!["alex@uni.edu", "pat@uni.edu", "sam@uni.edu"]
    );
}

#[tokio::test]
async fn test_list_responses_never_expose_uid() {
    let app = setup_test_app();

    for (uri, token) in [
        ("/api/professors", STUDENT_TOKEN),
        ("/api/students", PROFESSOR_TOKEN),
        ("/api/users", ADMIN_TOKEN),
    ] {
        let body = body_json(app.get(uri, Some(token)).await).await;
        for user in body.as_array().unwrap() {
            assert!(user.get("uid").is_none(), "{uri} leaked uid");
            assert!(user.get("id").is_some());
        }
    }
}

#[tokio::test]
async fn test_verified_caller_without_profile_is_forbidden() {
    let app = setup_test_app();

    let response = app.get("/api/users", Some(NEWCOMER_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"], "User profile not found. Log in first.");
}

#[tokio::test]
async fn test_list_without_token() {
    let app = setup_test_app();

    for uri in ["/api/professors", "/api/students", "/api/users"] {
        assert_eq!(
            app.get(uri, None).await.status(),
            StatusCode::UNAUTHORIZED,
            "{uri}"
        );
    }
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let app = setup_test_app();
    app.store.set_failing(true);

    let response = app.get("/api/users", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

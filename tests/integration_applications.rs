mod common;

use axum::http::StatusCode;
use common::{NEWCOMER_TOKEN, PROFESSOR_TOKEN, STUDENT_TOKEN, body_json, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_student_applies_to_unknown_research_id() {
    let app = setup_test_app();

    let response = app
        .post_json(
            "/api/apply",
            Some(STUDENT_TOKEN),
            json!({"research_id": "R1", "application_text": "I am interested"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Application submitted successfully");
    assert_eq!(body["application"]["research_id"], "R1");
    assert_eq!(body["application"]["student_id"], app.student.id);

    let stored = app.store.applications();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].student_id, app.student.id);
    assert_eq!(stored[0].research_id, "R1");
    assert_eq!(stored[0].application_text, "I am interested");
}

#[tokio::test]
async fn test_application_is_recorded_on_research() {
    let app = setup_test_app();

    let created = body_json(
        app.post_json(
            "/api/research",
            Some(PROFESSOR_TOKEN),
            json!({"title": "Robotics", "description": "Lab assistant"}),
        )
        .await,
    )
    .await;
    let research_id = created["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = app
            .post_json(
                "/api/apply",
                Some(STUDENT_TOKEN),
                json!({"research_id": research_id, "application_text": "Keen"}),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let research = app.store.research();
    assert_eq!(research[0].applicants, vec![app.student.id.clone()]);
    assert_eq!(app.store.applications().len(), 2);
}

#[tokio::test]
async fn test_professor_cannot_apply() {
    let app = setup_test_app();

    let response = app
        .post_json(
            "/api/apply",
            Some(PROFESSOR_TOKEN),
            json!({"research_id": "R1", "application_text": "Hello"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app.store.applications().is_empty());
}

#[tokio::test]
async fn test_apply_without_token() {
    let app = setup_test_app();

    let response = app
        .post_json(
            "/api/apply",
            None,
            json!({"research_id": "R1", "application_text": "Hello"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.store.applications().is_empty());
}

#[tokio::test]
async fn test_apply_before_login_is_forbidden() {
    let app = setup_test_app();

    let response = app
        .post_json(
            "/api/apply",
            Some(NEWCOMER_TOKEN),
            json!({"research_id": "R1", "application_text": "Hello"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app.store.applications().is_empty());
}

#[tokio::test]
async fn test_apply_rejects_empty_text() {
    let app = setup_test_app();

    let response = app
        .post_json(
            "/api/apply",
            Some(STUDENT_TOKEN),
            json!({"research_id": "R1", "application_text": ""}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "application_text is required");
    assert!(app.store.applications().is_empty());
}

#[tokio::test]
async fn test_apply_store_failure_is_500() {
    let app = setup_test_app();
    app.store.set_failing(true);

    let response = app
        .post_json(
            "/api/apply",
            Some(STUDENT_TOKEN),
            json!({"research_id": "R1", "application_text": "Hello"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use scholarlink::router::init_router;
use scholarlink::state::AppState;
use scholarlink_auth::{IdentityClaims, StaticTokenVerifier};
use scholarlink_config::CorsConfig;
use scholarlink_db::MemoryStore;
use scholarlink_models::{User, UserRole};
use tower::ServiceExt;

pub const STUDENT_TOKEN: &str = "student-token";
pub const PROFESSOR_TOKEN: &str = "professor-token";
pub const ADMIN_TOKEN: &str = "admin-token";
/// Verifies, but no user record exists for it until login.
pub const NEWCOMER_TOKEN: &str = "newcomer-token";
/// The student's email under a subject id the store has not seen.
pub const RELINKED_STUDENT_TOKEN: &str = "relinked-student-token";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub student: User,
    pub professor: User,
    pub admin: User,
}

pub fn claims(uid: &str, email: &str, name: Option<&str>) -> IdentityClaims {
    IdentityClaims {
        uid: uid.to_string(),
        email: email.to_string(),
        name: name.map(str::to_string),
    }
}

/// Router over an in-memory store seeded with one user per role.
pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let student = store.seed_user(
        "uid-student",
        "Sam Student",
        "sam@uni.edu",
        UserRole::Student,
    );
    let professor = store.seed_user(
        "uid-prof",
        "Pat Professor",
        "pat@uni.edu",
        UserRole::Professor,
    );
    let admin = store.seed_user("uid-admin", "Alex Admin", "alex@uni.edu", UserRole::Admin);

    let verifier = StaticTokenVerifier::new()
        .with_token(
            STUDENT_TOKEN,
            claims("uid-student", "sam@uni.edu", Some("Sam Student")),
        )
        .with_token(
            PROFESSOR_TOKEN,
            claims("uid-prof", "pat@uni.edu", Some("Pat Professor")),
        )
        .with_token(
            ADMIN_TOKEN,
            claims("uid-admin", "alex@uni.edu", Some("Alex Admin")),
        )
        .with_token(NEWCOMER_TOKEN, claims("uid-new", "new@uni.edu", None))
        .with_token(
            RELINKED_STUDENT_TOKEN,
            claims("uid-student-new", "sam@uni.edu", Some("Sam Student")),
        );

    let state = AppState::new(
        store.clone(),
        Arc::new(verifier),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );

    TestApp {
        router: init_router(state),
        store,
        student,
        professor,
        admin,
    }
}

#[allow(dead_code)]
impl TestApp {
    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = builder.body(Body::empty()).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

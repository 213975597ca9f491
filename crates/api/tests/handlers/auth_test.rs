use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use kasif_core::models::{
    session::Role,
    student::{StudentProfile, StudentStatus},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{bearer, TestContext, ADMIN_PASSWORD, SEED_STUDENT};

#[tokio::test]
async fn test_health_and_version_are_public() {
    let ctx = TestContext::new().await;

    let health = ctx.server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.json::<Value>(), json!({ "status": "ok" }));

    let version = ctx.server.get("/version").await.json::<Value>();
    assert_eq!(version["storageVersion"], "v3.1");
}

#[tokio::test]
async fn test_student_login_and_logout() {
    let ctx = TestContext::new().await;

    let login = ctx.login(Role::Student, "ogrenci", "123").await;
    assert_eq!(login.role, Role::Student);
    assert_eq!(login.user_id, Some(SEED_STUDENT));

    let me = ctx
        .server
        .get("/api/student/me")
        .add_header(AUTHORIZATION, bearer(&login))
        .await;
    assert_eq!(me.status_code(), StatusCode::OK);
    let profile = me.json::<Value>();
    assert_eq!(profile["username"], "ogrenci");
    assert!(profile.get("passwordHash").is_none());

    let logout = ctx
        .server
        .post("/api/auth/logout")
        .add_header(AUTHORIZATION, bearer(&login))
        .await;
    assert_eq!(logout.status_code(), StatusCode::NO_CONTENT);
    assert!(ctx.state.sessions.get(&login.token).await.is_none());

    let after = ctx
        .server
        .get("/api/student/me")
        .add_header(AUTHORIZATION, bearer(&login))
        .await;
    assert_eq!(after.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "role": "instructor", "username": "hoca", "password": "yanlis" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_missing_and_garbage_tokens_are_unauthorized() {
    let ctx = TestContext::new().await;

    let missing = ctx.server.get("/api/catalog/market").await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);

    let garbage = ctx
        .server
        .get("/api/catalog/market")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer nope"))
        .await;
    assert_eq!(garbage.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() {
    let ctx = TestContext::new().await;
    let student = ctx.student_auth().await;

    let response = ctx
        .server
        .get("/api/admin/students")
        .add_header(AUTHORIZATION, student.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    // Catalogue reads are open to any session.
    let market = ctx
        .server
        .get("/api/catalog/market")
        .add_header(AUTHORIZATION, student)
        .await;
    assert_eq!(market.status_code(), StatusCode::OK);
    assert_eq!(market.json::<Vec<Value>>().len(), 4);
}

#[tokio::test]
async fn test_admin_login_requires_configured_password() {
    let ctx = TestContext::new().await;
    let login = ctx.login(Role::Admin, "", ADMIN_PASSWORD).await;
    assert_eq!(login.user_id, None);

    let stored = ctx.state.admin_password_hash.as_deref().unwrap();
    assert!(stored.starts_with("$argon2"));
    assert!(!stored.contains(ADMIN_PASSWORD));

    let wrong = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "role": "admin", "password": "YONETICI" }))
        .await;
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);

    let disabled = TestContext::with_admin(None).await;
    let response = disabled
        .server
        .post("/api/auth/login")
        .json(&json!({ "role": "admin", "password": ADMIN_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_student_registration_flow() {
    let ctx = TestContext::new().await;

    let incomplete = ctx
        .server
        .post("/api/auth/register/student")
        .json(&json!({ "fullName": "", "username": "ali", "password": "x", "classCode": "1453" }))
        .await;
    assert_eq!(incomplete.status_code(), StatusCode::BAD_REQUEST);

    let response = ctx
        .server
        .post("/api/auth/register/student")
        .json(&json!({
            "fullName": "Ali Veli",
            "username": "ali",
            "password": "sifre",
            "classCode": "1453",
            "parentPhone": "0555 000 00 00"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created = response.json::<StudentProfile>();
    assert_eq!(created.status, StudentStatus::Pending);
    assert_eq!(created.points, 0);

    let duplicate = ctx
        .server
        .post("/api/auth/register/student")
        .json(&json!({ "fullName": "Ali İkinci", "username": "ali", "password": "y", "classCode": "1453" }))
        .await;
    assert_eq!(duplicate.status_code(), StatusCode::CONFLICT);

    // Pending students cannot log in yet.
    let login = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "role": "student", "username": "ali", "password": "sifre" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::UNAUTHORIZED);
}

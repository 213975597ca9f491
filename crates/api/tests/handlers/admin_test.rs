use axum::http::{header, header::AUTHORIZATION, StatusCode};
use kasif_core::models::{instructor::InstructorProfile, session::Role};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{bearer, TestContext, SEED_INSTRUCTOR};

#[tokio::test]
async fn test_instructor_search_and_creation() {
    let ctx = TestContext::new().await;
    let auth = ctx.admin_auth().await;

    let created = ctx
        .server
        .post("/api/admin/instructors")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "fullName": "Hoca Mehmet", "username": "mehmet", "password": "pw" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let created = created.json::<InstructorProfile>();
    assert!(created.class_codes.is_empty());

    let found = ctx
        .server
        .get("/api/admin/instructors?search=MEH")
        .add_header(AUTHORIZATION, auth.clone())
        .await
        .json::<Vec<InstructorProfile>>();
    assert_eq!(found, vec![created]);

    let everyone = ctx
        .server
        .get("/api/admin/instructors")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<Vec<Value>>();
    assert_eq!(everyone.len(), 2);
    assert!(everyone.iter().all(|i| i.get("passwordHash").is_none()));
}

#[tokio::test]
async fn test_credentials_update_changes_login() {
    let ctx = TestContext::new().await;
    let auth = ctx.admin_auth().await;

    let updated = ctx
        .server
        .put(&format!("/api/admin/instructors/{}", SEED_INSTRUCTOR))
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "username": "ahmet", "password": "yeni" }))
        .await
        .json::<InstructorProfile>();
    assert_eq!(updated.username, "ahmet");

    let reset = ctx
        .server
        .put(&format!("/api/admin/instructors/{}/password", SEED_INSTRUCTOR))
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "password": "" }))
        .await;
    assert_eq!(reset.status_code(), StatusCode::BAD_REQUEST);

    let login = ctx.login(Role::Instructor, "ahmet", "yeni").await;
    assert_eq!(login.user_id, Some(SEED_INSTRUCTOR));
}

#[tokio::test]
async fn test_deleting_instructor_revokes_sessions() {
    let ctx = TestContext::new().await;
    let admin = ctx.admin_auth().await;
    let instructor = ctx.login(Role::Instructor, "hoca", "123").await;

    let deleted = ctx
        .server
        .delete(&format!("/api/admin/instructors/{}", SEED_INSTRUCTOR))
        .add_header(AUTHORIZATION, admin.clone())
        .await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    let me = ctx
        .server
        .get("/api/instructor/me")
        .add_header(AUTHORIZATION, bearer(&instructor))
        .await;
    assert_eq!(me.status_code(), StatusCode::UNAUTHORIZED);

    // Students of a deleted instructor are kept.
    let students = ctx
        .server
        .get("/api/admin/students")
        .add_header(AUTHORIZATION, admin)
        .await
        .json::<Vec<Value>>();
    assert_eq!(students.len(), 1);
}

#[tokio::test]
async fn test_class_code_removal() {
    let ctx = TestContext::new().await;
    let auth = ctx.admin_auth().await;

    let missing = ctx
        .server
        .delete(&format!("/api/admin/instructors/{}/class-codes/999999", SEED_INSTRUCTOR))
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let updated = ctx
        .server
        .delete(&format!("/api/admin/instructors/{}/class-codes/1453", SEED_INSTRUCTOR))
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<InstructorProfile>();
    assert!(updated.class_codes.is_empty());
}

#[tokio::test]
async fn test_csv_exports() {
    let ctx = TestContext::new().await;
    let auth = ctx.admin_auth().await;

    let students = ctx
        .server
        .get("/api/admin/export/students.csv")
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(students.status_code(), StatusCode::OK);
    assert_eq!(
        students.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"kasif_listesi.csv\""
    );
    let body = students.text();
    assert!(body.starts_with('\u{FEFF}'));
    assert!(body.contains(r#""101","Örnek Öğrenci","ogrenci","1453","1000","50","approved""#));

    let instructors = ctx
        .server
        .get("/api/admin/export/instructors.csv")
        .add_header(AUTHORIZATION, auth)
        .await
        .text();
    assert!(instructors.contains(r#""1","Hoca Ahmet","hoca","1453""#));
    assert!(!instructors.contains("argon2"));
}

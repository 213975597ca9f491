use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use kasif_core::{
    models::{
        announcement::Announcement,
        catalog::Badge,
        instructor::GenerateClassCodeResponse,
        session::Role,
        student::{StudentProfile, StudentStatus, StudentUpdateResponse},
    },
    rules::Outcome,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{bearer, TestContext, SEED_STUDENT};

async fn register_student(ctx: &TestContext, username: &str, class_code: &str) -> StudentProfile {
    ctx.server
        .post("/api/auth/register/student")
        .json(&json!({
            "fullName": "Yeni Kaşif",
            "username": username,
            "password": "sifre",
            "classCode": class_code
        }))
        .await
        .json::<StudentProfile>()
}

#[tokio::test]
async fn test_class_code_generation_and_approval_queue() {
    let ctx = TestContext::new().await;
    let auth = ctx.instructor_auth().await;

    let generated = ctx
        .server
        .post("/api/instructor/class-codes")
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(generated.status_code(), StatusCode::CREATED);
    let generated = generated.json::<GenerateClassCodeResponse>();
    assert_eq!(generated.code.len(), 6);
    assert_eq!(generated.class_codes.len(), 2);

    let pending = register_student(&ctx, "yeni", &generated.code).await;
    assert_eq!(pending.status, StudentStatus::Pending);

    let group = ctx
        .server
        .get(&format!("/api/instructor/students?group={}", generated.code))
        .add_header(AUTHORIZATION, auth.clone())
        .await
        .json::<Vec<StudentProfile>>();
    assert_eq!(group.len(), 1);
    assert_eq!(group[0].id, pending.id);

    let approved = ctx
        .server
        .post(&format!("/api/instructor/students/{}/approve", pending.id))
        .add_header(AUTHORIZATION, auth.clone())
        .await
        .json::<StudentUpdateResponse>();
    assert_eq!(approved.outcome, Outcome::Applied);
    assert_eq!(approved.student.status, StudentStatus::Approved);

    // Approved students can no longer be rejected.
    let reject = ctx
        .server
        .delete(&format!("/api/instructor/students/{}", pending.id))
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(reject.status_code(), StatusCode::BAD_REQUEST);

    let all = ctx
        .server
        .get("/api/instructor/students")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<Vec<StudentProfile>>();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_reject_removes_pending_student() {
    let ctx = TestContext::new().await;
    let auth = ctx.instructor_auth().await;
    let pending = register_student(&ctx, "gecici", "1453").await;

    let reject = ctx
        .server
        .delete(&format!("/api/instructor/students/{}", pending.id))
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(reject.status_code(), StatusCode::NO_CONTENT);

    let again = ctx
        .server
        .delete(&format!("/api/instructor/students/{}", pending.id))
        .add_header(AUTHORIZATION, auth)
        .await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tracking_marks() {
    let ctx = TestContext::new().await;
    let auth = ctx.instructor_auth().await;
    let base = format!("/api/instructor/students/{}", SEED_STUDENT);

    let attendance = ctx
        .server
        .put(&format!("{}/attendance", base))
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "date": "2024-05-03", "mark": "present" }))
        .await
        .json::<Value>();
    assert_eq!(attendance["attendance"]["2024-05-03"], "present");

    let reading = ctx
        .server
        .put(&format!("{}/reading", base))
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "date": "2024-05-03", "mark": "study" }))
        .await
        .json::<Value>();
    assert_eq!(reading["reading"]["2024-05-03"], "study");

    let memorization = ctx
        .server
        .put(&format!("{}/memorization", base))
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "surahId": "ihlas", "mark": "passed" }))
        .await
        .json::<Value>();
    assert_eq!(memorization["memorization"]["ihlas"], "passed");

    let unknown = ctx
        .server
        .put(&format!("{}/memorization", base))
        .add_header(AUTHORIZATION, auth)
        .json(&json!({ "surahId": "fatiha", "mark": "passed" }))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_instructor_is_forbidden() {
    let ctx = TestContext::new().await;

    ctx.server
        .post("/api/auth/register/instructor")
        .json(&json!({ "fullName": "Hoca Mehmet", "username": "mehmet", "password": "pw" }))
        .await;
    let login = ctx.login(Role::Instructor, "mehmet", "pw").await;

    let response = ctx
        .server
        .post(&format!("/api/instructor/students/{}/badges", SEED_STUDENT))
        .add_header(AUTHORIZATION, bearer(&login))
        .json(&json!({ "badgeId": "namaz_kurtu" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let announcement = ctx
        .server
        .post("/api/instructor/announcements")
        .add_header(AUTHORIZATION, bearer(&login))
        .json(&json!({ "title": "Gezi", "message": "Cumartesi", "targetGroup": "1453" }))
        .await;
    assert_eq!(announcement.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_badge_catalog_and_award() {
    let ctx = TestContext::new().await;
    let auth = ctx.instructor_auth().await;

    let created = ctx
        .server
        .post("/api/instructor/badges")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "title": "Yardımsever", "value": 30 }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let badge = created.json::<Badge>();
    assert_eq!(badge.icon, "🏅");

    let award = |auth: HeaderValue| {
        ctx.server
            .post(&format!("/api/instructor/students/{}/badges", SEED_STUDENT))
            .add_header(AUTHORIZATION, auth)
            .json(&json!({ "badgeId": badge.id }))
    };
    let first = award(auth.clone()).await.json::<StudentUpdateResponse>();
    let second = award(auth.clone()).await.json::<StudentUpdateResponse>();
    assert_eq!(first.outcome, Outcome::Applied);
    assert_eq!(second.outcome, Outcome::Unchanged);
    assert_eq!(second.student.points, 1030);

    let deleted = ctx
        .server
        .delete(&format!("/api/instructor/badges/{}", badge.id))
        .add_header(AUTHORIZATION, auth)
        .await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_market_and_task_management() {
    let ctx = TestContext::new().await;
    let auth = ctx.instructor_auth().await;

    let invalid = ctx
        .server
        .post("/api/instructor/market")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "title": "Kalem", "price": -5, "currency": "GP" }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    let item = ctx
        .server
        .post("/api/instructor/market")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "title": "Kalem", "price": 50, "currency": "GP" }))
        .await
        .json::<Value>();
    let item_id = item["id"].as_str().unwrap().to_string();

    let task = ctx
        .server
        .post("/api/instructor/tasks")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "title": "Kitap oku", "reward": 25, "currency": "GP" }))
        .await
        .json::<Value>();
    assert_eq!(task["target"], 1);

    let removed = ctx
        .server
        .delete(&format!("/api/instructor/tasks/{}", task["id"]))
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(removed.status_code(), StatusCode::NO_CONTENT);

    let removed = ctx
        .server
        .delete(&format!("/api/instructor/market/{}", item_id))
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(removed.status_code(), StatusCode::NO_CONTENT);

    let market = ctx
        .server
        .get("/api/catalog/market")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<Vec<Value>>();
    assert_eq!(market.len(), 4);
}

#[tokio::test]
async fn test_announcements_newest_first() {
    let ctx = TestContext::new().await;
    let auth = ctx.instructor_auth().await;

    let posted = ctx
        .server
        .post("/api/instructor/announcements")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "title": "Kandil", "message": "Perşembe akşamı", "targetGroup": "1453" }))
        .await;
    assert_eq!(posted.status_code(), StatusCode::CREATED);
    let posted = posted.json::<Announcement>();

    let listed = ctx
        .server
        .get("/api/instructor/announcements")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<Vec<Announcement>>();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, posted.id);
}

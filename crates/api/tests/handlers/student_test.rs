use axum::http::{header::AUTHORIZATION, StatusCode};
use chrono::{Days, Utc};
use kasif_core::{
    models::student::{StudentProfile, StudentUpdateResponse},
    rules::Outcome,
};
use kasif_db::{blob::BlobStore, schema::Collection, DEFAULT_STORAGE_VERSION};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_prayer_is_credited_once_per_day() {
    let ctx = TestContext::new().await;
    let auth = ctx.student_auth().await;
    let today = Utc::now().date_naive();

    let first = ctx
        .server
        .post("/api/student/prayers")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "prayerId": "ogle", "type": "cemaat" }))
        .await
        .json::<StudentUpdateResponse>();
    assert_eq!(first.outcome, Outcome::Applied);
    assert_eq!(first.student.namaz_points, 70);
    assert!(first
        .student
        .prayers
        .contains_key(&format!("{}-ogle", today.format("%Y-%m-%d"))));

    let again = ctx
        .server
        .post("/api/student/prayers")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "prayerId": "ogle", "type": "tek", "date": today }))
        .await
        .json::<StudentUpdateResponse>();
    assert_eq!(again.outcome, Outcome::Unchanged);
    assert_eq!(again.student.namaz_points, 70);

    let unknown = ctx
        .server
        .post("/api/student/prayers")
        .add_header(AUTHORIZATION, auth)
        .json(&json!({ "prayerId": "teheccud", "type": "tek" }))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_prayer_for_another_day_is_rejected() {
    let ctx = TestContext::new().await;
    let auth = ctx.student_auth().await;
    let today = Utc::now().date_naive();

    for date in [
        "1900-01-01".to_string(),
        "2099-12-31".to_string(),
        (today - Days::new(1)).to_string(),
    ] {
        let response = ctx
            .server
            .post("/api/student/prayers")
            .add_header(AUTHORIZATION, auth.clone())
            .json(&json!({ "prayerId": "sabah", "type": "cemaat", "date": date }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    let me = ctx
        .server
        .get("/api/student/me")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<StudentProfile>();
    assert_eq!(me.namaz_points, 50);
    assert!(me.prayers.is_empty());
}

#[tokio::test]
async fn test_quiz_score_above_cap_is_rejected() {
    let ctx = TestContext::new().await;
    let auth = ctx.student_auth().await;

    let response = ctx
        .server
        .post("/api/student/quiz")
        .add_header(AUTHORIZATION, auth.clone())
        .json(&json!({ "score": i64::MAX }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let me = ctx
        .server
        .get("/api/student/me")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<StudentProfile>();
    assert_eq!(me.points, 1000);
}

#[tokio::test]
async fn test_market_purchase_checks_balance_and_persists() {
    let ctx = TestContext::new().await;
    let auth = ctx.student_auth().await;

    let short = ctx
        .server
        .post("/api/student/market/football/buy")
        .add_header(AUTHORIZATION, auth.clone())
        .await;
    assert_eq!(short.status_code(), StatusCode::BAD_REQUEST);
    assert!(short.json::<Value>()["error"]
        .as_str()
        .is_some_and(|m| m.contains("Insufficient balance")));

    let bought = ctx
        .server
        .post("/api/student/market/chocolate/buy")
        .add_header(AUTHORIZATION, auth.clone())
        .await
        .json::<StudentProfile>();
    assert_eq!(bought.points, 700);
    assert_eq!(bought.inventory, vec!["chocolate".to_string()]);

    let missing = ctx
        .server
        .post("/api/student/market/unicorn/buy")
        .add_header(AUTHORIZATION, auth)
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let slot = ctx
        .store
        .read(&Collection::Students.key(DEFAULT_STORAGE_VERSION))
        .await
        .unwrap()
        .unwrap();
    assert!(slot.contains("\"inventory\":[\"chocolate\"]"));
}

#[tokio::test]
async fn test_task_and_quiz_rewards() {
    let ctx = TestContext::new().await;
    let auth = ctx.student_auth().await;

    let task = ctx
        .server
        .post("/api/student/tasks/1/complete")
        .add_header(AUTHORIZATION, auth.clone())
        .await
        .json::<StudentUpdateResponse>();
    assert_eq!(task.outcome, Outcome::Applied);
    assert_eq!(task.student.namaz_points, 200);
    assert_eq!(task.student.completed_tasks, vec![1]);

    let repeat = ctx
        .server
        .post("/api/student/tasks/1/complete")
        .add_header(AUTHORIZATION, auth.clone())
        .await
        .json::<StudentUpdateResponse>();
    assert_eq!(repeat.outcome, Outcome::Unchanged);
    assert_eq!(repeat.student.namaz_points, 200);

    let quiz = ctx
        .server
        .post("/api/student/quiz")
        .add_header(AUTHORIZATION, auth)
        .json(&json!({ "score": 40 }))
        .await
        .json::<StudentUpdateResponse>();
    assert_eq!(quiz.student.points, 1040);
}

#[tokio::test]
async fn test_announcements_follow_class_code() {
    let ctx = TestContext::new().await;
    let auth = ctx.student_auth().await;

    let seen = ctx
        .server
        .get("/api/student/announcements")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<Vec<Value>>();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["classCode"], "1453");
}

#[tokio::test]
async fn test_catalog_lists_surahs() {
    let ctx = TestContext::new().await;
    let auth = ctx.student_auth().await;

    let surahs = ctx
        .server
        .get("/api/catalog/surahs")
        .add_header(AUTHORIZATION, auth)
        .await
        .json::<Vec<Value>>();
    assert_eq!(surahs.len(), 15);
    assert!(surahs.iter().all(|s| s["audioUrl"].is_string()));
}

//! # Student Handlers
//!
//! Everything a logged-in student can do for themselves: read their profile and
//! announcements, log prayers, finish weekly tasks, spend points in the market and
//! collect quiz rewards.
//!
//! Every handler acts on the student bound to the session token; no student id is
//! ever taken from the path or body.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use kasif_core::{
    errors::KasifError,
    models::{
        announcement::Announcement,
        student::{QuizResultRequest, RecordPrayerRequest, StudentProfile, StudentUpdateResponse},
    },
};
use kasif_db::repositories::student;
use std::sync::Arc;

use crate::{
    middleware::{auth::StudentSession, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn me(
    State(state): State<Arc<ApiState>>,
    StudentSession(id): StudentSession,
) -> Result<Json<StudentProfile>, AppError> {
    let student = student::get(&state.db, id).await?;
    Ok(Json(student.profile()))
}

/// Announcements for the student's class plus global ones, newest first.
#[axum::debug_handler]
pub async fn announcements(
    State(state): State<Arc<ApiState>>,
    StudentSession(id): StudentSession,
) -> Result<Json<Vec<Announcement>>, AppError> {
    Ok(Json(student::announcements(&state.db, id).await?))
}

/// Logs one of today's prayers. The first entry for a prayer on a given day wins.
///
/// Students can only log for today (UTC); backdated marks belong to instructors.
#[axum::debug_handler]
pub async fn record_prayer(
    State(state): State<Arc<ApiState>>,
    StudentSession(id): StudentSession,
    Json(payload): Json<RecordPrayerRequest>,
) -> Result<Json<StudentUpdateResponse>, AppError> {
    let now = Utc::now();
    let date = now.date_naive();
    if payload.date.is_some_and(|requested| requested != date) {
        return Err(AppError(KasifError::Validation(
            "Prayers can only be logged for today".to_string(),
        )));
    }

    let (outcome, student) = student::record_prayer(
        &state.db,
        id,
        date,
        &payload.prayer_id,
        payload.kind,
        now.timestamp_millis(),
    )
    .await?;

    Ok(Json(StudentUpdateResponse {
        outcome,
        student: student.profile(),
    }))
}

#[axum::debug_handler]
pub async fn complete_task(
    State(state): State<Arc<ApiState>>,
    StudentSession(id): StudentSession,
    Path(task_id): Path<i64>,
) -> Result<Json<StudentUpdateResponse>, AppError> {
    let (outcome, student) = student::complete_task(&state.db, id, task_id).await?;
    Ok(Json(StudentUpdateResponse {
        outcome,
        student: student.profile(),
    }))
}

#[axum::debug_handler]
pub async fn buy(
    State(state): State<Arc<ApiState>>,
    StudentSession(id): StudentSession,
    Path(item_id): Path<String>,
) -> Result<Json<StudentProfile>, AppError> {
    let student = student::purchase(&state.db, id, &item_id).await?;
    Ok(Json(student.profile()))
}

#[axum::debug_handler]
pub async fn quiz(
    State(state): State<Arc<ApiState>>,
    StudentSession(id): StudentSession,
    Json(payload): Json<QuizResultRequest>,
) -> Result<Json<StudentUpdateResponse>, AppError> {
    let (outcome, student) = student::credit_quiz(&state.db, id, payload.score).await?;
    Ok(Json(StudentUpdateResponse {
        outcome,
        student: student.profile(),
    }))
}

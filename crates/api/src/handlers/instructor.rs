//! # Instructor Handlers
//!
//! Class management for a logged-in instructor: join codes, the approval queue,
//! daily tracking, badges, the shared catalogue and class announcements.
//!
//! Student-scoped handlers only reach students whose class code belongs to the
//! instructor; anything else is answered with `403`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use kasif_core::models::{
    announcement::{Announcement, CreateAnnouncementRequest},
    catalog::{
        Badge, CreateBadgeRequest, CreateMarketItemRequest, CreateWeeklyTaskRequest, MarketItem,
        WeeklyTask,
    },
    instructor::{GenerateClassCodeResponse, InstructorProfile},
    session::Role,
    student::{
        AwardBadgeRequest, MarkAttendanceRequest, MarkMemorizationRequest, MarkReadingRequest,
        StudentProfile, StudentUpdateResponse,
    },
};
use kasif_db::repositories::{announcement, catalog, instructor, student};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    middleware::{auth::InstructorSession, error_handling::AppError},
    ApiState,
};

/// Query parameters for the student list
///
/// * `group` - Restrict the list to one of the instructor's class codes
#[derive(Debug, Deserialize)]
pub struct StudentsQuery {
    pub group: Option<String>,
}

#[axum::debug_handler]
pub async fn me(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
) -> Result<Json<InstructorProfile>, AppError> {
    Ok(Json(instructor::get(&state.db, id).await?.profile()))
}

#[axum::debug_handler]
pub async fn generate_class_code(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
) -> Result<(StatusCode, Json<GenerateClassCodeResponse>), AppError> {
    let (code, instructor) = instructor::generate_class_code(&state.db, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(GenerateClassCodeResponse {
            code,
            class_codes: instructor.class_codes,
        }),
    ))
}

#[axum::debug_handler]
pub async fn list_students(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Query(query): Query<StudentsQuery>,
) -> Result<Json<Vec<StudentProfile>>, AppError> {
    let students = student::list_for_instructor(&state.db, id, query.group.as_deref()).await?;
    Ok(Json(students.iter().map(|s| s.profile()).collect()))
}

#[axum::debug_handler]
pub async fn approve_student(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(student_id): Path<i64>,
) -> Result<Json<StudentUpdateResponse>, AppError> {
    let (outcome, student) = student::approve(&state.db, id, student_id).await?;
    Ok(Json(StudentUpdateResponse {
        outcome,
        student: student.profile(),
    }))
}

/// Rejecting deletes a pending registration outright.
#[axum::debug_handler]
pub async fn reject_student(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(student_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    student::reject(&state.db, id, student_id).await?;
    state.sessions.revoke_user(Role::Student, student_id).await;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn mark_attendance(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(student_id): Path<i64>,
    Json(payload): Json<MarkAttendanceRequest>,
) -> Result<Json<StudentProfile>, AppError> {
    let date = payload.date.unwrap_or_else(|| Utc::now().date_naive());
    let student = student::mark_attendance(&state.db, id, student_id, date, payload.mark).await?;
    Ok(Json(student.profile()))
}

#[axum::debug_handler]
pub async fn mark_reading(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(student_id): Path<i64>,
    Json(payload): Json<MarkReadingRequest>,
) -> Result<Json<StudentProfile>, AppError> {
    let date = payload.date.unwrap_or_else(|| Utc::now().date_naive());
    let student = student::mark_reading(&state.db, id, student_id, date, payload.mark).await?;
    Ok(Json(student.profile()))
}

#[axum::debug_handler]
pub async fn mark_memorization(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(student_id): Path<i64>,
    Json(payload): Json<MarkMemorizationRequest>,
) -> Result<Json<StudentProfile>, AppError> {
    let student =
        student::mark_memorization(&state.db, id, student_id, &payload.surah_id, payload.mark)
            .await?;
    Ok(Json(student.profile()))
}

#[axum::debug_handler]
pub async fn award_badge(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(student_id): Path<i64>,
    Json(payload): Json<AwardBadgeRequest>,
) -> Result<Json<StudentUpdateResponse>, AppError> {
    let (outcome, student) =
        student::award_badge(&state.db, id, student_id, &payload.badge_id).await?;
    Ok(Json(StudentUpdateResponse {
        outcome,
        student: student.profile(),
    }))
}

#[axum::debug_handler]
pub async fn create_badge(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Json(payload): Json<CreateBadgeRequest>,
) -> Result<(StatusCode, Json<Badge>), AppError> {
    let badge = catalog::add_badge(&state.db, &payload).await?;
    tracing::info!("Instructor {} added badge {}", id, badge.id);
    Ok((StatusCode::CREATED, Json(badge)))
}

#[axum::debug_handler]
pub async fn delete_badge(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(badge_id): Path<String>,
) -> Result<StatusCode, AppError> {
    catalog::delete_badge(&state.db, &badge_id).await?;
    tracing::info!("Instructor {} removed badge {}", id, badge_id);
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn create_market_item(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Json(payload): Json<CreateMarketItemRequest>,
) -> Result<(StatusCode, Json<MarketItem>), AppError> {
    let item = catalog::add_market_item(&state.db, &payload).await?;
    tracing::info!("Instructor {} added market item {}", id, item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

#[axum::debug_handler]
pub async fn delete_market_item(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(item_id): Path<String>,
) -> Result<StatusCode, AppError> {
    catalog::delete_market_item(&state.db, &item_id).await?;
    tracing::info!("Instructor {} removed market item {}", id, item_id);
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn create_task(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Json(payload): Json<CreateWeeklyTaskRequest>,
) -> Result<(StatusCode, Json<WeeklyTask>), AppError> {
    let task = catalog::add_task(&state.db, &payload).await?;
    tracing::info!("Instructor {} added task {}", id, task.id);
    Ok((StatusCode::CREATED, Json(task)))
}

#[axum::debug_handler]
pub async fn delete_task(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Path(task_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    catalog::delete_task(&state.db, task_id).await?;
    tracing::info!("Instructor {} removed task {}", id, task_id);
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_announcements(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
) -> Result<Json<Vec<Announcement>>, AppError> {
    Ok(Json(announcement::list_for_instructor(&state.db, id).await?))
}

#[axum::debug_handler]
pub async fn create_announcement(
    State(state): State<Arc<ApiState>>,
    InstructorSession(id): InstructorSession,
    Json(payload): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<Announcement>), AppError> {
    let today = Utc::now().date_naive();
    let posted = announcement::create(&state.db, id, &payload, today).await?;
    Ok((StatusCode::CREATED, Json(posted)))
}

//! # Admin Handlers
//!
//! Instructor account management and spreadsheet exports.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use kasif_core::models::{
    instructor::{
        InstructorProfile, RegisterInstructorRequest, ResetPasswordRequest,
        UpdateCredentialsRequest,
    },
    session::Role,
    student::StudentProfile,
};
use kasif_db::{
    export,
    repositories::{instructor, student},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    middleware::{auth::AdminSession, error_handling::AppError},
    ApiState,
};

/// Query parameters for the instructor list
///
/// * `search` - Case-insensitive substring of the name or username
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[axum::debug_handler]
pub async fn list_instructors(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<InstructorProfile>> {
    let instructors = instructor::list(&state.db, query.search.as_deref()).await;
    Json(instructors.iter().map(|i| i.profile()).collect())
}

#[axum::debug_handler]
pub async fn create_instructor(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    Json(payload): Json<RegisterInstructorRequest>,
) -> Result<(StatusCode, Json<InstructorProfile>), AppError> {
    let created = instructor::register(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(created.profile())))
}

#[axum::debug_handler]
pub async fn update_instructor(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCredentialsRequest>,
) -> Result<Json<InstructorProfile>, AppError> {
    let updated = instructor::update_credentials(&state.db, id, &payload).await?;
    Ok(Json(updated.profile()))
}

#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    Path(id): Path<i64>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<InstructorProfile>, AppError> {
    let updated = instructor::reset_password(&state.db, id, &payload.password).await?;
    Ok(Json(updated.profile()))
}

/// Deletes the account and logs it out everywhere. Its students are kept.
#[axum::debug_handler]
pub async fn delete_instructor(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    instructor::delete(&state.db, id).await?;
    let revoked = state.sessions.revoke_user(Role::Instructor, id).await;
    tracing::info!("Deleted instructor {} ({} sessions revoked)", id, revoked);
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_class_code(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
    Path((id, code)): Path<(i64, String)>,
) -> Result<Json<InstructorProfile>, AppError> {
    let updated = instructor::delete_class_code(&state.db, id, &code).await?;
    Ok(Json(updated.profile()))
}

#[axum::debug_handler]
pub async fn list_students(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
) -> Json<Vec<StudentProfile>> {
    let students = student::list_all(&state.db).await;
    Json(students.iter().map(|s| s.profile()).collect())
}

fn csv_attachment(file_name: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}

#[axum::debug_handler]
pub async fn export_students(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
) -> Result<Response, AppError> {
    let students = student::list_all(&state.db).await;
    let body = export::students_csv(&students)?;
    Ok(csv_attachment(export::STUDENTS_FILE_NAME, body))
}

#[axum::debug_handler]
pub async fn export_instructors(
    State(state): State<Arc<ApiState>>,
    _admin: AdminSession,
) -> Result<Response, AppError> {
    let instructors = instructor::list(&state.db, None).await;
    let body = export::instructors_csv(&instructors)?;
    Ok(csv_attachment(export::INSTRUCTORS_FILE_NAME, body))
}

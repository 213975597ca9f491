use axum::{extract::State, http::StatusCode, Json};
use kasif_core::{
    errors::KasifError,
    models::{
        instructor::{InstructorProfile, RegisterInstructorRequest},
        session::{LoginRequest, LoginResponse, Role},
        student::{RegisterStudentRequest, StudentProfile},
    },
};
use kasif_db::repositories::{credentials, instructor, student};
use std::sync::Arc;

use crate::{
    middleware::{
        auth::{AuthSession, Session},
        error_handling::AppError,
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user_id = match payload.role {
        Role::Student => {
            Some(student::authenticate(&state.db, &payload.username, &payload.password).await?.id)
        }
        Role::Instructor => Some(
            instructor::authenticate(&state.db, &payload.username, &payload.password)
                .await?
                .id,
        ),
        Role::Admin => {
            let hash = state.admin_password_hash.as_deref().ok_or_else(|| {
                KasifError::Authentication("Admin login is disabled".to_string())
            })?;
            if !credentials::verify_password(hash, &payload.password) {
                return Err(AppError(KasifError::Authentication(
                    "Invalid password".to_string(),
                )));
            }
            None
        }
    };

    let token = state
        .sessions
        .create(Session { role: payload.role, user_id })
        .await;

    tracing::info!("{:?} login for account {:?}", payload.role, user_id);

    Ok(Json(LoginResponse {
        token,
        role: payload.role,
        user_id,
    }))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    auth: AuthSession,
) -> StatusCode {
    state.sessions.revoke(&auth.token).await;
    StatusCode::NO_CONTENT
}

/// Self-registration; the account stays pending until an instructor approves it.
#[axum::debug_handler]
pub async fn register_student(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterStudentRequest>,
) -> Result<(StatusCode, Json<StudentProfile>), AppError> {
    let created = student::register(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(created.profile())))
}

#[axum::debug_handler]
pub async fn register_instructor(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterInstructorRequest>,
) -> Result<(StatusCode, Json<InstructorProfile>), AppError> {
    let created = instructor::register(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(created.profile())))
}

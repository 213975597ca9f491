//! # Authentication Module
//!
//! Bearer-token sessions for the three roles of the Kaşif API.
//!
//! A successful login stores a [`Session`] under a fresh UUID v4 token. Handlers
//! declare the role they need through an extractor:
//!
//! - [`AuthSession`]: any logged-in user
//! - [`StudentSession`], [`InstructorSession`]: the user id of that role
//! - [`AdminSession`]: the admin
//!
//! Missing, malformed or unknown tokens are rejected with `401`; a valid token of the
//! wrong role is rejected with `403`.
//!
//! Sessions live in memory only. Restarting the server logs everyone out.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use kasif_core::{
    errors::{KasifError, KasifResult},
    models::session::Role,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    /// `None` for the admin.
    pub user_id: Option<i64>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the session and returns its token.
    pub async fn create(&self, session: Session) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.write().await.insert(token, session);
        token
    }

    pub async fn get(&self, token: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(token).copied()
    }

    /// Returns whether the token was live.
    pub async fn revoke(&self, token: &Uuid) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drops every session of one account and returns how many there were.
    pub async fn revoke_user(&self, role: Role, user_id: i64) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !(s.role == role && s.user_id == Some(user_id)));
        before - sessions.len()
    }
}

/// Parses `Authorization: Bearer <uuid>`.
fn bearer_token(parts: &Parts) -> KasifResult<Uuid> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| KasifError::Authentication("Missing bearer token".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| KasifError::Authentication("Malformed authorization header".to_string()))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| KasifError::Authentication("Expected a bearer token".to_string()))?;

    Uuid::parse_str(token.trim())
        .map_err(|_| KasifError::Authentication("Malformed bearer token".to_string()))
}

fn require_role(session: &Session, role: Role) -> KasifResult<()> {
    if session.role != role {
        return Err(KasifError::Authorization(format!(
            "This action requires the {:?} role",
            role
        )));
    }
    Ok(())
}

fn require_user(session: &Session, role: Role) -> KasifResult<i64> {
    require_role(session, role)?;
    session
        .user_id
        .ok_or_else(|| KasifError::Authentication("Session has no account".to_string()))
}

/// Any live session.
#[derive(Debug, Clone, Copy)]
pub struct AuthSession {
    pub token: Uuid,
    pub session: Session,
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let session = state
            .sessions
            .get(&token)
            .await
            .ok_or_else(|| KasifError::Authentication("Unknown or expired session".to_string()))?;

        Ok(AuthSession { token, session })
    }
}

/// The logged-in student's id.
#[derive(Debug, Clone, Copy)]
pub struct StudentSession(pub i64);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for StudentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthSession::from_request_parts(parts, state).await?;
        Ok(StudentSession(require_user(&auth.session, Role::Student)?))
    }
}

/// The logged-in instructor's id.
#[derive(Debug, Clone, Copy)]
pub struct InstructorSession(pub i64);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for InstructorSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthSession::from_request_parts(parts, state).await?;
        Ok(InstructorSession(require_user(&auth.session, Role::Instructor)?))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthSession::from_request_parts(parts, state).await?;
        require_role(&auth.session, Role::Admin)?;
        Ok(AdminSession)
    }
}

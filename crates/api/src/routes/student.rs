use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/student/me", get(handlers::student::me))
        .route(
            "/api/student/announcements",
            get(handlers::student::announcements),
        )
        .route("/api/student/prayers", post(handlers::student::record_prayer))
        .route(
            "/api/student/tasks/:id/complete",
            post(handlers::student::complete_task),
        )
        .route("/api/student/market/:id/buy", post(handlers::student::buy))
        .route("/api/student/quiz", post(handlers::student::quiz))
}

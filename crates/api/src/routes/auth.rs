use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route(
            "/api/auth/register/student",
            post(handlers::auth::register_student),
        )
        .route(
            "/api/auth/register/instructor",
            post(handlers::auth::register_instructor),
        )
}

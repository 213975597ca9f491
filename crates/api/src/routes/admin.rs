use axum::{
    routing::{delete, get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/admin/instructors",
            get(handlers::admin::list_instructors).post(handlers::admin::create_instructor),
        )
        .route(
            "/api/admin/instructors/:id",
            put(handlers::admin::update_instructor).delete(handlers::admin::delete_instructor),
        )
        .route(
            "/api/admin/instructors/:id/password",
            put(handlers::admin::reset_password),
        )
        .route(
            "/api/admin/instructors/:id/class-codes/:code",
            delete(handlers::admin::delete_class_code),
        )
        .route("/api/admin/students", get(handlers::admin::list_students))
        .route(
            "/api/admin/export/students.csv",
            get(handlers::admin::export_students),
        )
        .route(
            "/api/admin/export/instructors.csv",
            get(handlers::admin::export_instructors),
        )
}

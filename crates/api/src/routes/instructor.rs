use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/instructor/me", get(handlers::instructor::me))
        .route(
            "/api/instructor/class-codes",
            post(handlers::instructor::generate_class_code),
        )
        // Class roster and tracking
        .route(
            "/api/instructor/students",
            get(handlers::instructor::list_students),
        )
        .route(
            "/api/instructor/students/:id",
            delete(handlers::instructor::reject_student),
        )
        .route(
            "/api/instructor/students/:id/approve",
            post(handlers::instructor::approve_student),
        )
        .route(
            "/api/instructor/students/:id/attendance",
            put(handlers::instructor::mark_attendance),
        )
        .route(
            "/api/instructor/students/:id/reading",
            put(handlers::instructor::mark_reading),
        )
        .route(
            "/api/instructor/students/:id/memorization",
            put(handlers::instructor::mark_memorization),
        )
        .route(
            "/api/instructor/students/:id/badges",
            post(handlers::instructor::award_badge),
        )
        // Shared catalogue
        .route("/api/instructor/badges", post(handlers::instructor::create_badge))
        .route(
            "/api/instructor/badges/:id",
            delete(handlers::instructor::delete_badge),
        )
        .route(
            "/api/instructor/market",
            post(handlers::instructor::create_market_item),
        )
        .route(
            "/api/instructor/market/:id",
            delete(handlers::instructor::delete_market_item),
        )
        .route("/api/instructor/tasks", post(handlers::instructor::create_task))
        .route(
            "/api/instructor/tasks/:id",
            delete(handlers::instructor::delete_task),
        )
        // Announcements
        .route(
            "/api/instructor/announcements",
            get(handlers::instructor::list_announcements)
                .post(handlers::instructor::create_announcement),
        )
}

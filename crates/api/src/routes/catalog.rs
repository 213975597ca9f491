use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/catalog/market", get(handlers::catalog::market))
        .route("/api/catalog/tasks", get(handlers::catalog::tasks))
        .route("/api/catalog/badges", get(handlers::catalog::badges))
        .route("/api/catalog/surahs", get(handlers::catalog::surahs))
        .route("/api/prayer-times", get(handlers::catalog::prayer_times))
}

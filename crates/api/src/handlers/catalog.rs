use axum::{extract::State, Json};
use chrono::Utc;
use kasif_core::{
    models::{
        catalog::{Badge, MarketItem, Surah, WeeklyTask},
        prayer::PrayerTimesResponse,
    },
    seed,
};
use kasif_db::repositories::catalog;
use std::sync::Arc;

use crate::{
    middleware::{auth::AuthSession, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn market(
    State(state): State<Arc<ApiState>>,
    _auth: AuthSession,
) -> Json<Vec<MarketItem>> {
    Json(catalog::market_items(&state.db).await)
}

#[axum::debug_handler]
pub async fn tasks(
    State(state): State<Arc<ApiState>>,
    _auth: AuthSession,
) -> Json<Vec<WeeklyTask>> {
    Json(catalog::tasks(&state.db).await)
}

#[axum::debug_handler]
pub async fn badges(
    State(state): State<Arc<ApiState>>,
    _auth: AuthSession,
) -> Json<Vec<Badge>> {
    Json(catalog::badges(&state.db).await)
}

/// The fixed memorisation syllabus.
#[axum::debug_handler]
pub async fn surahs(State(_state): State<Arc<ApiState>>, _auth: AuthSession) -> Json<Vec<Surah>> {
    Json(seed::SURAHS.to_vec())
}

/// Today's timetable for the configured city with each prayer's window status.
#[axum::debug_handler]
pub async fn prayer_times(
    State(state): State<Arc<ApiState>>,
    _auth: AuthSession,
) -> Result<Json<PrayerTimesResponse>, AppError> {
    Ok(Json(state.prayer_times.today(Utc::now()).await?))
}

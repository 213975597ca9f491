//! # Kaşif API
//!
//! The API crate provides the web server for the Kaşif & Namaz tracker. Students log
//! prayers and spend their points, instructors run their classes, and the admin manages
//! instructor accounts and exports.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into repository calls
//! - **Middleware**: Bearer sessions, role extractors and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; all state lives in a [`kasif_db::Database`].

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Client for the daily prayer timetable
pub mod prayer_times;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use kasif_db::{repositories::credentials::hash_password, Database};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::{middleware::auth::SessionStore, prayer_times::PrayerTimesClient};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Record store for every collection
    pub db: Database,
    /// Live bearer sessions
    pub sessions: SessionStore,
    /// Argon2 hash of the admin password; `None` disables admin login
    pub admin_password_hash: Option<String>,
    pub prayer_times: PrayerTimesClient,
}

impl ApiState {
    /// Hashes the admin password once so logins verify against the hash.
    pub fn new(
        db: Database,
        admin_password: Option<&str>,
        prayer_times: PrayerTimesClient,
    ) -> Result<Self> {
        let admin_password_hash = admin_password.map(hash_password).transpose()?;
        Ok(Self {
            db,
            sessions: SessionStore::new(),
            admin_password_hash,
            prayer_times,
        })
    }
}

/// Builds the router with every endpoint attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Login and registration
        .merge(routes::auth::routes())
        // Catalogue and prayer times for any session
        .merge(routes::catalog::routes())
        // Role-gated endpoints
        .merge(routes::student::routes())
        .merge(routes::instructor::routes())
        .merge(routes::admin::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(allowed)
        .allow_credentials(true)
}

/// Installs the global log subscriber at `level`.
///
/// Call it before opening the store so seeding is logged.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Starts the API server with the provided configuration and record store
///
/// This function builds the shared state and the router, applies CORS and the
/// request timeout, and serves until the process is stopped. Logging is expected
/// to be set up already through [`init_tracing`].
///
/// # Example
///
/// ```no_run
/// # async fn run(store: std::sync::Arc<dyn kasif_db::blob::BlobStore>) -> eyre::Result<()> {
/// let config = kasif_api::config::ApiConfig::from_env()?;
/// kasif_api::init_tracing(config.log_level)?;
/// let db = kasif_db::Database::open(store, &config.storage_version).await?;
/// kasif_api::start_server(config, db).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db: Database) -> Result<()> {
    let timeout = Duration::from_secs(config.request_timeout);
    let prayer_times = PrayerTimesClient::new(config.prayer_api.clone(), timeout)?;
    if config.admin_password.is_none() {
        warn!("KASIF_ADMIN_PASSWORD is not set; admin login is disabled");
    }

    let state = Arc::new(ApiState::new(
        db,
        config.admin_password.as_deref(),
        prayer_times,
    )?);
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(timeout)
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

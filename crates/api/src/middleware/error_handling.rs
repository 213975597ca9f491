//! # Error Handling Middleware
//!
//! This module maps domain errors to HTTP status codes and JSON error
//! responses so every endpoint of the Kaşif API fails the same way.
//!
//! | Error                                   | Status |
//! |-----------------------------------------|--------|
//! | `NotFound`                              | 404    |
//! | `Validation`, `InsufficientBalance`     | 400    |
//! | `Conflict`                              | 409    |
//! | `Authentication`                        | 401    |
//! | `Authorization`                         | 403    |
//! | `Upstream`                              | 502    |
//! | `Storage`, `Internal`                   | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kasif_core::errors::KasifError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `KasifError` and implements `IntoResponse`, so handlers
/// can return `Result<_, AppError>` and use `?` on repository calls.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use kasif_api::middleware::error_handling::AppError;
/// use kasif_core::errors::KasifError;
///
/// async fn handler(found: bool) -> Result<Json<&'static str>, AppError> {
///     if !found {
///         return Err(AppError(KasifError::NotFound("Student 7".to_string())));
///     }
///     Ok(Json("ok"))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub KasifError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            KasifError::NotFound(_) => StatusCode::NOT_FOUND,
            KasifError::Validation(_) => StatusCode::BAD_REQUEST,
            KasifError::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
            KasifError::Conflict(_) => StatusCode::CONFLICT,
            KasifError::Authentication(_) => StatusCode::UNAUTHORIZED,
            KasifError::Authorization(_) => StatusCode::FORBIDDEN,
            KasifError::Upstream(_) => StatusCode::BAD_GATEWAY,
            KasifError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            KasifError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `KasifResult` inside handlers.
impl From<KasifError> for AppError {
    fn from(err: KasifError) -> Self {
        AppError(err)
    }
}

/// Infrastructure failures surface as storage errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(KasifError::Storage(err))
    }
}

/// Maps a `KasifError` straight to an HTTP response.
pub fn map_error(err: KasifError) -> Response {
    AppError(err).into_response()
}

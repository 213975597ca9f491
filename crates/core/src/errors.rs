use thiserror::Error;

use crate::models::catalog::Currency;

#[derive(Error, Debug)]
pub enum KasifError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Insufficient balance: {balance} {currency} available, {price} {currency} required")]
    InsufficientBalance {
        currency: Currency,
        balance: i64,
        price: i64,
    },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type KasifResult<T> = Result<T, KasifError>;

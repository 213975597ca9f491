use axum::http::StatusCode;
use kasif_api::middleware::error_handling::{map_error, AppError};
use kasif_core::{errors::KasifError, models::catalog::Currency};
use rstest::rstest;

#[rstest]
#[case(KasifError::NotFound("Student 7".to_string()), StatusCode::NOT_FOUND)]
#[case(KasifError::Validation("Please fill in all fields".to_string()), StatusCode::BAD_REQUEST)]
#[case(
    KasifError::InsufficientBalance { currency: Currency::Gp, balance: 10, price: 300 },
    StatusCode::BAD_REQUEST
)]
#[case(KasifError::Conflict("Username taken".to_string()), StatusCode::CONFLICT)]
#[case(KasifError::Authentication("Invalid password".to_string()), StatusCode::UNAUTHORIZED)]
#[case(KasifError::Authorization("Not your class".to_string()), StatusCode::FORBIDDEN)]
#[case(KasifError::Upstream("timeout".to_string()), StatusCode::BAD_GATEWAY)]
#[case(KasifError::Storage(eyre::eyre!("disk full")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: KasifError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[test]
fn test_internal_error_is_500() {
    let error = KasifError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));
    assert_eq!(AppError(error).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_eyre_report_becomes_storage_error() {
    let error: AppError = eyre::eyre!("slot unreadable").into();
    assert!(matches!(error.0, KasifError::Storage(_)));
}

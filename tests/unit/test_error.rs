use marketdata_admin::error::{ApiError, AppError};
use serde_json::json;

#[test]
fn test_api_error_reads_message_and_data() {
    let body = br#"{"message":"Conflict","data":{"isDeleted":true,"id":"X"}}"#;
    let err = ApiError::from_body(409, body);

    assert_eq!(err.message, "Conflict");
    assert_eq!(err.status_code, 409);
    assert_eq!(err.data_field("isDeleted"), Some(&json!(true)));
    assert_eq!(err.data_field("id"), Some(&json!("X")));
    assert!(err.is_deleted_conflict());
}

#[test]
fn test_api_error_falls_back_to_capitalized_message() {
    let err = ApiError::from_body(400, br#"{"Message":"Bad symbol"}"#);
    assert_eq!(err.message, "Bad symbol");
    assert_eq!(err.response_data, None);
}

#[test]
fn test_api_error_malformed_body_uses_generic_message() {
    let err = ApiError::from_body(502, b"<html>Bad Gateway</html>");
    assert_eq!(err.message, "HTTP error! status: 502");
    assert_eq!(err.status_code, 502);
    assert_eq!(err.response_data, None);
}

#[test]
fn test_api_error_empty_body_uses_generic_message() {
    let err = ApiError::from_body(500, b"");
    assert_eq!(err.message, "HTTP error! status: 500");
}

#[test]
fn test_conflict_without_deleted_marker_is_not_restorable() {
    let err = ApiError::from_body(409, br#"{"message":"Exists","data":{"isDeleted":false}}"#);
    assert!(!err.is_deleted_conflict());

    let err = ApiError::from_body(400, br#"{"data":{"isDeleted":true}}"#);
    assert!(!err.is_deleted_conflict());
}

#[test]
fn test_app_error_display_session_expired() {
    assert_eq!(
        AppError::SessionExpired.to_string(),
        "Session expired. Please login again."
    );
}

#[test]
fn test_app_error_display_no_refresh_token() {
    assert_eq!(
        AppError::NoRefreshToken.to_string(),
        "no refresh token available"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("Please fill in all fields".to_string());
    assert_eq!(error.to_string(), "invalid input: Please fill in all fields");
}

#[test]
fn test_app_error_from_api_error() {
    let app_error: AppError = ApiError::new("Not found", 404, None).into();
    assert_eq!(app_error.status_code(), Some(404));
    assert_eq!(
        app_error.as_api_error().map(|e| e.message.as_str()),
        Some("Not found")
    );
    assert!(app_error.to_string().contains("404"));
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let app_error: AppError = std::io::Error::other("test").into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
    assert_eq!(AppError::SessionExpired.status_code(), None);
}

#[test]
fn test_api_error_display_and_source() {
    let err = ApiError::new("Symbol not found", 404, None);
    assert_eq!(err.to_string(), "Symbol not found (status 404)");

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}

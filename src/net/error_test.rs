use super::*;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: Some("Title already used".to_owned()) };
    assert_eq!(err.user_message("Failed to save"), "Title already used");
}

#[test]
fn user_message_falls_back_when_server_is_silent() {
    let blank = ApiError::Status { status: 500, message: Some("  ".to_owned()) };
    assert_eq!(blank.user_message("Failed to save"), "Failed to save");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("Failed to save"), "Failed to save");
}

#[test]
fn classification_helpers() {
    assert!(ApiError::Cancelled.is_cancelled());
    assert!(!ApiError::Unavailable.is_cancelled());
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
}

#[test]
fn form_error_names_the_field() {
    assert_eq!(FormError::Missing("title").to_string(), "title is required");
}

use super::*;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 401, message: Some("Invalid email or password".to_owned()) };
    assert_eq!(err.user_message("Login failed"), "Invalid email or password");
}

#[test]
fn user_message_uses_fallback_for_status_without_message() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn user_message_shows_whitespace_message_verbatim() {
    let err = ApiError::Status { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(err.user_message("Failed to send reset link"), "  ");
}

#[test]
fn user_message_empty_server_message_uses_fallback() {
    let err = ApiError::Status { status: 400, message: Some(String::new()) };
    assert_eq!(err.user_message("Failed to send reset link"), "Failed to send reset link");
}

#[test]
fn user_message_network_and_decode_use_generic_text() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("Login failed"), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message("Login failed"), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Rejected.user_message("Login failed"), GENERIC_ERROR_MESSAGE);
    assert_eq!(ApiError::Unavailable.user_message("Login failed"), GENERIC_ERROR_MESSAGE);
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 429, message: None };
    assert_eq!(err.to_string(), "request failed with status 429");
}

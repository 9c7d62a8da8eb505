use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn is_truthy_follows_javascript_rules() {
    use serde_json::json;
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!("")));
    assert!(is_truthy(&json!(true)));
    assert!(is_truthy(&json!(1)));
    assert!(is_truthy(&json!("Token is invalid")));
    assert!(is_truthy(&json!({})));
    assert!(is_truthy(&json!([])));
}

// =============================================================
// Profile
// =============================================================

#[test]
fn decode_profile_accepts_user_without_error_field() {
    let body = r#"{"id":1,"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com"}"#;
    let user = decode_profile(200, true, body).unwrap();
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn decode_profile_accepts_falsy_error_field() {
    let body = r#"{"first_name":"Ada","last_name":"Lovelace","error":false}"#;
    assert!(decode_profile(200, true, body).is_ok());
}

#[test]
fn decode_profile_rejects_truthy_error_field() {
    assert_eq!(decode_profile(200, true, r#"{"error":true}"#), Err(ApiError::Rejected));
    assert_eq!(decode_profile(200, true, r#"{"error":"expired"}"#), Err(ApiError::Rejected));
}

#[test]
fn decode_profile_rejects_http_error() {
    let err = decode_profile(401, false, r#"{"message":"Token is invalid"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 401, message: Some("Token is invalid".to_owned()) });
}

#[test]
fn decode_profile_rejects_garbage() {
    assert!(matches!(decode_profile(200, true, "<html>"), Err(ApiError::Decode(_))));
}

// =============================================================
// Login
// =============================================================

#[test]
fn decode_login_success() {
    let body = r#"{"token":"t-1","user":{"id":1,"first_name":"Grace","last_name":"Hopper"}}"#;
    let resp: LoginResponse = decode_json(200, true, body).unwrap();
    assert_eq!(resp.token, "t-1");
    assert_eq!(resp.user.first_name, "Grace");
}

#[test]
fn decode_login_failure_carries_server_message() {
    let err = decode_json::<LoginResponse>(401, false, r#"{"message":"Invalid email or password"}"#).unwrap_err();
    assert_eq!(err.user_message("Login failed"), "Invalid email or password");
}

#[test]
fn decode_login_failure_without_message_uses_fallback() {
    let err = decode_json::<LoginResponse>(500, false, "{}").unwrap_err();
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn decode_login_failure_shows_non_string_message() {
    let err = decode_json::<LoginResponse>(400, false, r#"{"message":42}"#).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: Some("42".to_owned()) });
    assert_eq!(err.user_message("Login failed"), "42");
}

#[test]
fn decode_login_failure_with_falsy_message_uses_fallback() {
    for body in [r#"{"message":""}"#, r#"{"message":false}"#, r#"{"message":null}"#, r#"{"message":0}"#] {
        let err = decode_json::<LoginResponse>(401, false, body).unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Login failed", "body: {body}");
    }
}

#[test]
fn decode_login_failure_with_non_json_body_is_generic() {
    let err = decode_json::<LoginResponse>(502, false, "Bad Gateway").unwrap_err();
    assert_eq!(err.user_message("Login failed"), "An error occurred. Please try again.");
}

// =============================================================
// Password reset / fragments
// =============================================================

#[test]
fn decode_reset_success_ignores_body() {
    assert_eq!(decode_reset(200, true, ""), Ok(()));
    assert_eq!(decode_reset(204, true, "not json"), Ok(()));
}

#[test]
fn decode_reset_failure_carries_message() {
    let err = decode_reset(404, false, r#"{"message":"Unknown email"}"#).unwrap_err();
    assert_eq!(err.user_message("Failed to send reset link"), "Unknown email");
}

#[test]
fn decode_fragment_returns_text_verbatim() {
    let html = "<nav id=\"main\">Tools</nav>".to_owned();
    assert_eq!(decode_fragment(200, true, html.clone()), Ok(html));
}

#[test]
fn decode_fragment_rejects_error_status() {
    assert_eq!(
        decode_fragment(404, false, "Not Found".to_owned()),
        Err(ApiError::Status { status: 404, message: None })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned(), remember_me: false };
    let login_result = futures::executor::block_on(login("/api/login", &req));
    assert_eq!(login_result, Err(ApiError::Unavailable));
    let fragment = futures::executor::block_on(fetch_fragment("/components/header.html"));
    assert_eq!(fragment, Err(ApiError::Unavailable));
}

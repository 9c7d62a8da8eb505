use super::*;
use crate::net::types::UserProfile;
use crate::state::auth::{NavView, SessionState};
use crate::state::ui::{ActiveModal, LoginForm, ResetFeedback};

fn user(first: &str, last: &str) -> UserProfile {
    UserProfile { first_name: first.to_owned(), last_name: last.to_owned(), extra: serde_json::Map::new() }
}

fn filled_login() -> UiState {
    let mut ui = UiState::default();
    ui.open_login();
    ui.login.email = "ada@example.com".to_owned();
    ui.login.password = "secret".to_owned();
    ui.login.remember_me = true;
    ui
}

// =============================================================
// Login
// =============================================================

#[test]
fn begin_login_builds_request_and_marks_busy() {
    let mut ui = filled_login();
    let req = begin_login(&mut ui).unwrap();
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, "secret");
    assert!(req.remember_me);
    assert!(ui.login.busy);
    assert_eq!(begin_login(&mut ui), None);
}

#[test]
fn login_success_signs_in_closes_dialog_and_returns_token() {
    let mut auth = AuthState::default();
    let mut ui = filled_login();
    begin_login(&mut ui);

    let token = apply_login_result(
        &mut auth,
        &mut ui,
        Ok(LoginResponse { token: "jwt-1".to_owned(), user: user("Ada", "Lovelace") }),
    );
    assert_eq!(token.as_deref(), Some("jwt-1"));
    assert_eq!(NavView::from(&auth.session).display_name, "Ada Lovelace");
    assert_eq!(ui.modal, ActiveModal::Closed);
    assert_eq!(ui.login, LoginForm::default());
}

#[test]
fn login_rejection_keeps_dialog_open_with_server_message() {
    let mut auth = AuthState::default();
    let mut ui = filled_login();
    begin_login(&mut ui);

    let err = ApiError::Status { status: 401, message: Some("Invalid email or password".to_owned()) };
    let token = apply_login_result(&mut auth, &mut ui, Err(err));
    assert_eq!(token, None);
    assert_eq!(auth.session, SessionState::LoggedOut);
    assert_eq!(ui.modal, ActiveModal::Login);
    assert_eq!(ui.login.error.as_deref(), Some("Invalid email or password"));
    assert!(!ui.login.busy);
}

#[test]
fn login_rejection_without_message_uses_fallback() {
    let mut auth = AuthState::default();
    let mut ui = filled_login();
    apply_login_result(&mut auth, &mut ui, Err(ApiError::Status { status: 500, message: None }));
    assert_eq!(ui.login.error.as_deref(), Some("Login failed"));
}

#[test]
fn login_network_failure_shows_generic_message() {
    let mut auth = AuthState::default();
    let mut ui = filled_login();
    apply_login_result(&mut auth, &mut ui, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(ui.login.error.as_deref(), Some("An error occurred. Please try again."));
}

// =============================================================
// Password reset
// =============================================================

#[test]
fn reset_success_then_failure_swaps_banners() {
    let mut ui = UiState::default();
    ui.open_forgot_password();
    ui.reset.email = "ada@example.com".to_owned();
    assert_eq!(begin_reset(&mut ui).as_deref(), Some("ada@example.com"));
    assert_eq!(begin_reset(&mut ui), None);

    apply_reset_result(&mut ui, Ok(()));
    assert_eq!(ui.reset.feedback, ResetFeedback::Sent);
    assert_eq!(ui.reset.email, "");
    assert!(!ui.reset.busy);

    apply_reset_result(&mut ui, Err(ApiError::Status { status: 404, message: None }));
    assert_eq!(ui.reset.feedback.success_text(), None);
    assert_eq!(ui.reset.feedback.error_text(), Some("Failed to send reset link"));
}

#[test]
fn reset_failure_uses_server_message() {
    let mut ui = UiState::default();
    let err = ApiError::Status { status: 400, message: Some("Email not found".to_owned()) };
    apply_reset_result(&mut ui, Err(err));
    assert_eq!(ui.reset.feedback, ResetFeedback::Failed("Email not found".to_owned()));
}

// =============================================================
// Signal entry points (non-browser paths)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_without_token_does_nothing() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        restore_session(auth, &ClientConfig::default());
        let state = auth.get_untracked();
        assert!(!state.restoring);
        assert_eq!(state.session, SessionState::LoggedOut);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_signs_out_regardless_of_backend() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        auth.update(|a| a.sign_in(user("Ada", "Lovelace")));
        logout(auth, &ClientConfig::default());
        assert_eq!(auth.get_untracked().session, SessionState::LoggedOut);
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_login_marks_form_busy() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        let ui = RwSignal::new(filled_login());
        submit_login(auth, ui, &ClientConfig::default());
        assert!(ui.get_untracked().login.busy);
    });
}

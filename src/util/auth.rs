//! Account flows: session restore, login, password reset, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call the `submit_*`/`restore_session`/`logout` entry points,
//! which spawn the HTTP call and feed its result through the pure `apply_*`
//! functions. The `apply_*` functions hold all of the decision logic and are
//! what the tests exercise.
//!
//! ERROR HANDLING
//! ==============
//! No error escapes these flows. Every failure becomes inline UI text or a
//! logged-out session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::state::auth::AuthState;
use crate::state::ui::{LOGIN_FAILED_MESSAGE, RESET_FAILED_MESSAGE, UiState};
use crate::util::token_storage;

/// Apply a login response. Returns the token the caller must persist.
pub fn apply_login_result(
    auth: &mut AuthState,
    ui: &mut UiState,
    result: Result<LoginResponse, ApiError>,
) -> Option<String> {
    match result {
        Ok(LoginResponse { token, user }) => {
            auth.sign_in(user);
            ui.login_succeeded();
            Some(token)
        }
        Err(e) => {
            ui.login_failed(e.user_message(LOGIN_FAILED_MESSAGE));
            None
        }
    }
}

/// Apply a password-reset response.
pub fn apply_reset_result(ui: &mut UiState, result: Result<(), ApiError>) {
    match result {
        Ok(()) => ui.reset_sent(),
        Err(e) => ui.reset_failed(e.user_message(RESET_FAILED_MESSAGE)),
    }
}

/// Build the login request from the dialog fields. `None` while a request is in flight.
pub fn begin_login(ui: &mut UiState) -> Option<LoginRequest> {
    if ui.login.busy {
        return None;
    }
    ui.login.busy = true;
    Some(LoginRequest {
        email: ui.login.email.clone(),
        password: ui.login.password.clone(),
        remember_me: ui.login.remember_me,
    })
}

/// Take the email from the reset dialog. `None` while a request is in flight.
pub fn begin_reset(ui: &mut UiState) -> Option<String> {
    if ui.reset.busy {
        return None;
    }
    ui.reset.busy = true;
    Some(ui.reset.email.clone())
}

/// Rehydrate the session from a stored token, if there is one.
pub fn restore_session(auth: RwSignal<AuthState>, config: &ClientConfig) {
    let Some(token) = token_storage::load_token(&config.token_key) else {
        return;
    };
    let Some(ticket) = auth.try_update(AuthState::begin_restore) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::TokenAction;

        let endpoint = config.endpoints.profile.clone();
        let token_key = config.token_key.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_profile(&endpoint, &token).await;
            if let Err(e) = &result {
                log::debug!("session restore failed: {e}");
            }
            if auth.try_update(|a| a.finish_restore(ticket, result)) == Some(TokenAction::Discard) {
                token_storage::clear_token(&token_key);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, ticket);
    }
}

/// Submit the login dialog.
pub fn submit_login(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, config: &ClientConfig) {
    let Some(request) = ui.try_update(begin_login).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let endpoint = config.endpoints.login.clone();
        let token_key = config.token_key.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&endpoint, &request).await;
            let mut token = None;
            auth.update(|a| ui.update(|u| token = apply_login_result(a, u, result)));
            if let Some(token) = token {
                token_storage::store_token(&token_key, &token);
                log::debug!("signed in");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, config, request);
    }
}

/// Submit the forgot-password dialog.
pub fn submit_password_reset(ui: RwSignal<UiState>, config: &ClientConfig) {
    let Some(email) = ui.try_update(begin_reset).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let endpoint = config.endpoints.forgot_password.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::request_password_reset(&endpoint, &email).await;
            ui.update(|u| apply_reset_result(u, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
    }
}

/// End the session: notify the backend, then clear everything and go home
/// whatever the backend said.
pub fn logout(auth: RwSignal<AuthState>, config: &ClientConfig) {
    let token = token_storage::load_token(&config.token_key);

    #[cfg(feature = "hydrate")]
    {
        let endpoint = config.endpoints.logout.clone();
        let token_key = config.token_key.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&endpoint, token.as_deref()).await;
            token_storage::clear_token(&token_key);
            auth.update(AuthState::sign_out);
            log::debug!("signed out");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        token_storage::clear_token(&config.token_key);
        auth.update(AuthState::sign_out);
    }
}

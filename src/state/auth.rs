//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided by `App`. The nav controls, the login
//! modal, and the logout button all transition it through the methods below;
//! nothing writes `session` directly.
//!
//! ORDERING
//! ========
//! Every sign-in/sign-out bumps `epoch`. A profile restore started before the
//! bump carries the old epoch in its `RestoreTicket` and is dropped when it
//! resolves, so a slow restore can never resurrect a session after logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::UserProfile;

/// The two session states. There is no intermediate state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(UserProfile),
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(user) => Some(user),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}

/// What the caller must do with the stored token after a restore resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenAction {
    Keep,
    Discard,
}

/// Proof that a restore was started at a given epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestoreTicket(u64);

/// Authentication state: the session plus restore bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: SessionState,
    pub restoring: bool,
    epoch: u64,
}

impl AuthState {
    /// Mark a profile restore as in flight.
    pub fn begin_restore(&mut self) -> RestoreTicket {
        self.restoring = true;
        RestoreTicket(self.epoch)
    }

    /// Apply the outcome of a profile restore.
    ///
    /// Stale tickets are ignored entirely. Otherwise a profile signs the user
    /// in, and any error signs out and asks for the token to be discarded.
    pub fn finish_restore(&mut self, ticket: RestoreTicket, result: Result<UserProfile, ApiError>) -> TokenAction {
        if ticket.0 != self.epoch {
            return TokenAction::Keep;
        }
        self.restoring = false;
        match result {
            Ok(user) => {
                self.sign_in(user);
                TokenAction::Keep
            }
            Err(_) => {
                self.sign_out();
                TokenAction::Discard
            }
        }
    }

    /// Transition to `LoggedIn`, replacing any previous user.
    pub fn sign_in(&mut self, user: UserProfile) {
        self.epoch += 1;
        self.restoring = false;
        self.session = SessionState::LoggedIn(user);
    }

    /// Transition to `LoggedOut` and forget the user.
    pub fn sign_out(&mut self) {
        self.epoch += 1;
        self.restoring = false;
        self.session = SessionState::LoggedOut;
    }
}

/// Visibility of the two nav groups, derived from one `SessionState`.
///
/// The logged-out buttons and the logged-in menu are always toggled together
/// from the same value, so they can never both be visible. While a stored
/// session is being restored neither group is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub auth_buttons_class: &'static str,
    pub user_menu_class: &'static str,
    pub display_name: String,
}

impl From<&SessionState> for NavView {
    fn from(session: &SessionState) -> Self {
        match session {
            SessionState::LoggedOut => Self {
                auth_buttons_class: "",
                user_menu_class: "d-none",
                display_name: String::new(),
            },
            SessionState::LoggedIn(user) => Self {
                auth_buttons_class: "d-none",
                user_menu_class: "d-flex",
                display_name: user.display_name(),
            },
        }
    }
}

impl From<&AuthState> for NavView {
    fn from(state: &AuthState) -> Self {
        if state.restoring {
            return Self { auth_buttons_class: "d-none", user_menu_class: "d-none", display_name: String::new() };
        }
        Self::from(&state.session)
    }
}

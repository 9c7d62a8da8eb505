//! Local UI chrome state (modals, banners, loading indicator, auth forms).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `auth` so the session store
//! only ever holds the session. Mutually exclusive pieces of UI are modelled
//! as single enums rather than pairs of flags.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const RESET_FAILED_MESSAGE: &str = "Failed to send reset link";
pub const RESET_SENT_MESSAGE: &str = "Password reset link has been sent to your email.";
pub const DEFAULT_LOADING_TEXT: &str = "Processing...";

/// Which account dialog is open. At most one can be.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveModal {
    #[default]
    Closed,
    Login,
    ForgotPassword,
}

/// Page-level alert banner. Showing one kind replaces the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Banner {
    #[default]
    Hidden,
    Error(String),
    Success(String),
}

/// Fields and inline error of the login dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub show_password: bool,
    pub error: Option<String>,
    pub busy: bool,
}

/// Outcome banner of the forgot-password dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResetFeedback {
    #[default]
    None,
    Sent,
    Failed(String),
}

impl ResetFeedback {
    #[must_use]
    pub fn success_text(&self) -> Option<&'static str> {
        matches!(self, Self::Sent).then_some(RESET_SENT_MESSAGE)
    }

    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fields and feedback of the forgot-password dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub email: String,
    pub feedback: ResetFeedback,
    pub busy: bool,
}

/// UI state for dialogs, the page banner, and the loading indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub modal: ActiveModal,
    pub banner: Banner,
    /// `Some(text)` while the loading indicator is visible.
    pub loading: Option<String>,
    pub login: LoginForm,
    pub reset: ResetForm,
}

impl UiState {
    /// Open the login dialog, closing the forgot-password dialog if open.
    pub fn open_login(&mut self) {
        self.modal = ActiveModal::Login;
    }

    /// Open the forgot-password dialog, closing the login dialog if open.
    pub fn open_forgot_password(&mut self) {
        self.modal = ActiveModal::ForgotPassword;
    }

    pub fn close_modal(&mut self) {
        self.modal = ActiveModal::Closed;
    }

    /// Successful login: close the dialog and reset the form.
    pub fn login_succeeded(&mut self) {
        self.modal = ActiveModal::Closed;
        self.login = LoginForm::default();
    }

    /// Failed login: keep the dialog open and show `message` inline.
    pub fn login_failed(&mut self, message: String) {
        self.login.busy = false;
        self.login.error = Some(message);
    }

    /// Reset link sent: show the fixed confirmation and clear the email.
    pub fn reset_sent(&mut self) {
        self.reset = ResetForm { feedback: ResetFeedback::Sent, ..ResetForm::default() };
    }

    pub fn reset_failed(&mut self, message: String) {
        self.reset.busy = false;
        self.reset.feedback = ResetFeedback::Failed(message);
    }

    /// Show an error banner; an empty message hides the banner.
    pub fn show_error(&mut self, message: &str) {
        self.banner = if message.is_empty() { Banner::Hidden } else { Banner::Error(message.to_owned()) };
    }

    pub fn show_success(&mut self, message: &str) {
        self.banner = Banner::Success(message.to_owned());
    }

    pub fn clear_banner(&mut self) {
        self.banner = Banner::Hidden;
    }

    /// Hide the banner only if it still shows this success message.
    pub fn dismiss_success(&mut self, message: &str) {
        if matches!(&self.banner, Banner::Success(shown) if shown == message) {
            self.banner = Banner::Hidden;
        }
    }

    /// Show or hide the loading indicator. `text` defaults to `"Processing..."`.
    pub fn set_loading(&mut self, show: bool, text: Option<&str>) {
        self.loading = show.then(|| text.unwrap_or(DEFAULT_LOADING_TEXT).to_owned());
    }
}

/// Input type and icon class for the password field.
#[must_use]
pub fn password_field_view(visible: bool) -> (&'static str, &'static str) {
    if visible { ("text", "fa-eye-slash") } else { ("password", "fa-eye") }
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, the auth dialogs, and tool forms while
//! reading/writing `AuthState` and `UiState` from Leptos context providers.

pub mod alert_banner;
pub mod forgot_password_modal;
pub mod loading_indicator;
pub mod login_modal;
pub mod nav_auth;
pub mod newsletter_form;
pub mod processing_form;
pub mod shell_fragment;
pub mod tool_search;
pub mod upload_field;

//! Forgot-password dialog. Success and error banners come from one
//! `ResetFeedback` value, so only one of them is ever visible.

use leptos::prelude::*;

use crate::components::processing_form::{SubmitButton, SubmitLock};
use crate::config::ClientConfig;
use crate::state::ui::{ActiveModal, UiState};

#[component]
pub fn ForgotPasswordModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    SubmitLock::from_ui(ui, |u| u.reset.busy).provide();

    let is_open = move || ui.get().modal == ActiveModal::ForgotPassword;
    let success = move || ui.get().reset.feedback.success_text();
    let error = move || ui.get().reset.feedback.error_text().map(str::to_owned);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        config.with_value(|c| crate::util::auth::submit_password_reset(ui, c));
    };
    let on_close = move |_| ui.update(UiState::close_modal);
    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(UiState::open_login);
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop fade show"></div>
            <div id="forgotPasswordModal" class="modal fade show d-block" tabindex="-1" role="dialog" aria-modal="true">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Reset Password"</h5>
                            <button type="button" class="btn-close" aria-label="Close" on:click=on_close></button>
                        </div>
                        <div class="modal-body">
                            <form id="forgotPasswordForm" on:submit=on_submit>
                                <p class="text-muted">"Enter your email and we'll send you a link to reset your password."</p>
                                <div class="mb-3">
                                    <label for="resetEmail" class="form-label">"Email address"</label>
                                    <input
                                        id="resetEmail"
                                        class="form-control"
                                        type="email"
                                        required=true
                                        prop:value=move || ui.get().reset.email
                                        on:input=move |ev| ui.update(|u| u.reset.email = event_target_value(&ev))
                                    />
                                </div>
                                <div id="resetError" class=move || if error().is_some() { "alert alert-danger" } else { "alert alert-danger d-none" }>
                                    {move || error().unwrap_or_default()}
                                </div>
                                <div id="resetSuccess" class=move || if success().is_some() { "alert alert-success" } else { "alert alert-success d-none" }>
                                    {move || success().unwrap_or_default()}
                                </div>
                                <SubmitButton label="Send Reset Link" class="btn btn-primary w-100"/>
                            </form>
                            <div class="text-center mt-3">
                                <a href="#" on:click=on_back>"Back to login"</a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

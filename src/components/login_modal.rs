//! Login dialog with email/password, remember-me, and password visibility toggle.

use leptos::prelude::*;

use crate::components::processing_form::{SubmitButton, SubmitLock};
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::{ActiveModal, UiState, password_field_view};

#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    SubmitLock::from_ui(ui, |u| u.login.busy).provide();

    let is_open = move || ui.get().modal == ActiveModal::Login;
    let field_view = move || password_field_view(ui.get().login.show_password);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        config.with_value(|c| crate::util::auth::submit_login(auth, ui, c));
    };
    let on_close = move |_| ui.update(UiState::close_modal);
    let on_forgot = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(UiState::open_forgot_password);
    };
    let on_toggle_password = move |_| ui.update(|u| u.login.show_password = !u.login.show_password);

    view! {
        <Show when=is_open>
            <div class="modal-backdrop fade show"></div>
            <div id="loginModal" class="modal fade show d-block" tabindex="-1" role="dialog" aria-modal="true">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Log In"</h5>
                            <button type="button" class="btn-close" aria-label="Close" on:click=on_close></button>
                        </div>
                        <div class="modal-body">
                            <form id="loginForm" on:submit=on_submit>
                                <div class="mb-3">
                                    <label for="loginEmail" class="form-label">"Email address"</label>
                                    <input
                                        id="loginEmail"
                                        class="form-control"
                                        type="email"
                                        required=true
                                        prop:value=move || ui.get().login.email
                                        on:input=move |ev| ui.update(|u| u.login.email = event_target_value(&ev))
                                    />
                                </div>
                                <div class="mb-3">
                                    <label for="loginPassword" class="form-label">"Password"</label>
                                    <div class="input-group">
                                        <input
                                            id="loginPassword"
                                            class="form-control"
                                            type=move || field_view().0
                                            required=true
                                            prop:value=move || ui.get().login.password
                                            on:input=move |ev| ui.update(|u| u.login.password = event_target_value(&ev))
                                        />
                                        <button class="btn btn-outline-secondary" type="button" on:click=on_toggle_password>
                                            <i class=move || format!("fas {}", field_view().1)></i>
                                        </button>
                                    </div>
                                </div>
                                <div class="mb-3 form-check">
                                    <input
                                        id="rememberMe"
                                        class="form-check-input"
                                        type="checkbox"
                                        prop:checked=move || ui.get().login.remember_me
                                        on:change=move |ev| ui.update(|u| u.login.remember_me = event_target_checked(&ev))
                                    />
                                    <label class="form-check-label" for="rememberMe">"Remember me"</label>
                                </div>
                                <div
                                    id="loginError"
                                    class=move || if ui.get().login.error.is_some() { "alert alert-danger" } else { "alert alert-danger d-none" }
                                >
                                    {move || ui.get().login.error.unwrap_or_default()}
                                </div>
                                <SubmitButton label="Log In" class="btn btn-primary w-100"/>
                            </form>
                            <div class="text-center mt-3">
                                <a href="#" on:click=on_forgot>"Forgot password?"</a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
